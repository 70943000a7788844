use std::{process::ExitCode, sync::Arc};

use clap::{ArgGroup, Args, Parser, Subcommand};
use color_eyre::eyre::Result;
use dotenv::dotenv;
use interviewdesk_client::{SchedulerApi, create_client};
use interviewdesk_core::models::{InterviewerId, SlotId};
use interviewdesk_ui::{
    Navigator, Notifier, Outcome,
    config::DeskConfig,
    console::{ConsoleNavigator, ConsoleNotifier, ConsoleSurface},
    views::{
        admin_form::{AdminForm, FormChanges, FormMode, SlotSpec},
        booked_slots::BookedSlotsView,
        booking::{BookingDesk, DEFAULT_PAGE_LIMIT},
        notifications::NotificationsView,
        slot_detail::{SlotDetailViewer, spawn_auto_refresh},
    },
};
use tracing::{debug, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about = "Admin and booking desk for the interview scheduler")]
struct Cli {
    /// Answer "yes" to every confirmation
    #[arg(long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage interviewers and their weekly availability
    #[command(subcommand)]
    Admin(AdminCommand),
    /// Show booked slots across all interviewers
    Booked,
    /// Show every slot across all interviewers
    All,
    /// Cancel a booked slot
    Cancel { slot_id: SlotId },
    /// Show one slot, optionally refreshing it periodically
    Slot {
        slot_id: SlotId,
        #[arg(long)]
        watch: bool,
    },
    /// Page through available slots
    Available {
        #[arg(long)]
        cursor: Option<String>,
        #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: u32,
    },
    /// Book an available slot for a candidate
    Book {
        slot_id: SlotId,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Change the candidate on a booked slot
    UpdateBooking {
        slot_id: SlotId,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Show the emails queued for a recipient or a slot
    #[command(group(ArgGroup::new("target").required(true).args(["email", "slot"])))]
    Notifications {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        slot: Option<SlotId>,
    },
}

#[derive(Subcommand, Debug)]
enum AdminCommand {
    /// Create an interviewer
    Create(FormArgs),
    /// Overwrite an interviewer with the given values
    Update {
        interviewer_id: InterviewerId,
        #[command(flatten)]
        form: FormArgs,
    },
    /// Load an interviewer, apply the given changes and save it
    Edit {
        interviewer_id: InterviewerId,
        #[command(flatten)]
        form: FormArgs,
    },
    /// Delete an interviewer and all their slots
    Delete { interviewer_id: InterviewerId },
    /// Generate bookable slots from the availability templates
    Generate { interviewer_id: InterviewerId },
    /// Open the interviewer's slot listing
    Slots { interviewer_id: InterviewerId },
}

#[derive(Args, Debug)]
struct FormArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    /// Weekly interview cap
    #[arg(long)]
    max: Option<String>,
    /// Availability as DAY,START,END (e.g. MONDAY,09:00,17:00); repeatable.
    /// Without it an update keeps the stored availability.
    #[arg(long = "slot")]
    slots: Vec<SlotSpec>,
}

impl From<FormArgs> for FormChanges {
    fn from(args: FormArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            max_interviews_per_week: args.max,
            slots: args.slots,
        }
    }
}

struct Desk {
    config: DeskConfig,
    api: Arc<dyn SchedulerApi>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<ConsoleNavigator>,
}

impl Desk {
    fn surface(&self) -> Arc<ConsoleSurface> {
        Arc::new(ConsoleSurface)
    }

    fn admin_form(&self) -> AdminForm {
        AdminForm::new(
            self.api.clone(),
            self.notifier.clone(),
            self.navigator.clone(),
        )
    }

    fn slots_view(&self) -> BookedSlotsView {
        BookedSlotsView::new(self.api.clone(), self.notifier.clone(), self.surface())
            .with_fetch_concurrency(self.config.fetch_concurrency)
    }

    async fn run(&self, command: Command) -> Result<Outcome> {
        let outcome = match command {
            Command::Admin(admin) => {
                let outcome = self.run_admin(admin).await;
                if self.navigator.take_reload() {
                    self.list_interviewers().await?;
                }
                outcome
            }
            Command::Booked => {
                self.slots_view().load_booked_slots().await;
                Outcome::Completed
            }
            Command::All => {
                self.slots_view().load_all_slots().await;
                Outcome::Completed
            }
            Command::Cancel { slot_id } => self.slots_view().cancel_booking(slot_id).await,
            Command::Slot { slot_id, watch } => self.show_slot(slot_id, watch).await,
            Command::Available { cursor, limit } => {
                let desk = BookingDesk::new(self.api.clone(), self.notifier.clone(), self.surface());
                if let Some(next) = desk.load_available(cursor, limit).await {
                    println!("Next page: interviewdesk available --cursor {} --limit {}", next, limit);
                }
                Outcome::Completed
            }
            Command::Book {
                slot_id,
                name,
                email,
            } => {
                let desk = BookingDesk::new(self.api.clone(), self.notifier.clone(), self.surface());
                desk.book_slot(slot_id, &name, &email).await
            }
            Command::UpdateBooking {
                slot_id,
                name,
                email,
            } => {
                let desk = BookingDesk::new(self.api.clone(), self.notifier.clone(), self.surface());
                desk.update_booking(slot_id, &name, &email).await
            }
            Command::Notifications { email, slot } => {
                let view = NotificationsView::new(self.api.clone(), self.surface());
                match (email, slot) {
                    (Some(email), _) => view.load_for_email(&email).await,
                    (None, Some(slot_id)) => view.load_for_slot(slot_id).await,
                    (None, None) => Outcome::Failed("Pass --email or --slot".to_string()),
                }
            }
        };
        Ok(outcome)
    }

    async fn run_admin(&self, command: AdminCommand) -> Outcome {
        let mut form = self.admin_form();
        match command {
            AdminCommand::Create(args) => {
                form.apply_changes(&args.into());
                form.submit_as(FormMode::Create).await
            }
            AdminCommand::Update {
                interviewer_id,
                form: args,
            } => {
                form.apply_changes(&args.into());
                form.submit_as(FormMode::Update(interviewer_id)).await
            }
            AdminCommand::Edit {
                interviewer_id,
                form: args,
            } => {
                let loaded = form.edit_interviewer(interviewer_id).await;
                if !loaded.is_completed() {
                    return loaded;
                }
                form.apply_changes(&args.into());
                println!("{}...", form.submit_label());
                form.submit().await
            }
            AdminCommand::Delete { interviewer_id } => form.delete_interviewer(interviewer_id).await,
            AdminCommand::Generate { interviewer_id } => form.generate_slots(interviewer_id).await,
            AdminCommand::Slots { interviewer_id } => {
                form.view_slots(interviewer_id);
                Outcome::Completed
            }
        }
    }

    /// The admin page after a reload: the current interviewer list.
    async fn list_interviewers(&self) -> Result<()> {
        let interviewers = self.api.list_interviewers().await?;

        println!("Interviewers ({})", interviewers.len());
        for interviewer in interviewers {
            println!(
                "  #{} {} <{}> max {}/week",
                interviewer.id,
                interviewer.name,
                interviewer.email,
                interviewer.max_interviews_per_week
            );
        }
        Ok(())
    }

    async fn show_slot(&self, slot_id: SlotId, watch: bool) -> Outcome {
        let viewer = SlotDetailViewer::new(self.api.clone(), self.notifier.clone());
        let mut outcome = viewer.view_slot_details(slot_id).await;
        if !watch {
            return outcome;
        }

        let navigator: Arc<dyn Navigator> = self.navigator.clone();
        let refresh = spawn_auto_refresh(navigator, self.config.refresh_period());
        info!(slot_id, "watching slot, press Ctrl-C to stop");

        loop {
            tokio::select! {
                _ = self.navigator.wait_for_reload() => {
                    debug!(slot_id, "refreshing slot details");
                    outcome = viewer.view_slot_details(slot_id).await;
                }
                _ = tokio::signal::ctrl_c() => break,
            }
        }

        refresh.abort();
        outcome
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = DeskConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let api = create_client(&config.client)?;
    info!("Using backend at {}", config.client.base_url);

    let desk = Desk {
        navigator: Arc::new(ConsoleNavigator::new(config.open_browser)),
        notifier: Arc::new(ConsoleNotifier::new(cli.yes)),
        api,
        config,
    };

    let outcome = desk.run(cli.command).await?;
    Ok(match outcome {
        Outcome::Failed(_) => ExitCode::FAILURE,
        Outcome::Completed | Outcome::Declined => ExitCode::SUCCESS,
    })
}
