use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use clubhub::auth::{AuthProvider, MemoryAuth};
use clubhub::config::{Config, ConfigStore};
use clubhub::domain::{ClubId, UserId};
use clubhub::nav::{start_for, Route};
use clubhub::repository::{MemoryStore, Seed, WriteGate};
use clubhub::ui::admin::AdminViewModel;
use clubhub::ui::auth::AuthViewModel;
use clubhub::ui::club_browse::ClubBrowseViewModel;
use clubhub::ui::club_detail::ClubDetailViewModel;
use clubhub::ui::leader_dashboard::LeaderDashboardViewModel;
use clubhub::ui::mvi::UiState;
use clubhub::ui::notifications::NotificationsViewModel;
use clubhub::ui::student_home::StudentHomeViewModel;
use clubhub::ui::Screen;

const DEMO_SEED: &str = include_str!("../demos/seed.json");

#[derive(Parser)]
#[command(name = "clubhub", version, about = "Inspect club screens against a seeded store")]
struct Cli {
    /// Config file (default: the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON seed file; overrides `store.seed_path`
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List active clubs
    Browse {
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// A student's clubs, upcoming events and applications
    Home {
        #[arg(long)]
        user: String,
    },
    /// One club as seen by a user
    Club {
        #[arg(long)]
        user: String,
        #[arg(long)]
        club: String,
    },
    /// A user's inbox
    Notifications {
        #[arg(long)]
        user: String,
        #[arg(long)]
        mark_all_read: bool,
    },
    /// A leader's management view of their club
    Dashboard {
        #[arg(long)]
        user: String,
        #[arg(long)]
        club: String,
    },
    /// Pending club applications and users
    Admin {
        #[arg(long)]
        user: String,
    },
    /// Sign in and report where the user would land
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Parse a route path
    Route { path: String },
    /// Show the configuration in effect and where it was read from
    Config,
}

struct App {
    config: ConfigStore,
    seed: Seed,
    auth: Arc<MemoryAuth>,
    store: MemoryStore,
}

impl App {
    fn open(cli: &Cli) -> Result<Self> {
        let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
        let config = Config::load_from(&config_path)
            .with_context(|| format!("loading {}", config_path.display()))?;
        tracing::debug!(path = %config_path.display(), "configuration loaded");

        let seed = match cli.seed.as_ref().or(config.store.seed_path.as_ref()) {
            Some(path) => Seed::load_from(path)?,
            None => Seed::from_json(DEMO_SEED).context("parsing built-in demo seed")?,
        };
        let auth = Arc::new(MemoryAuth::from_accounts(&seed.accounts));
        let gate = if config.store.require_session_for_writes {
            WriteGate::requiring_session(auth.probe())
        } else {
            WriteGate::open()
        };
        let store = MemoryStore::seeded(&seed, gate);
        Ok(Self {
            config: ConfigStore::new(config, config_path),
            seed,
            auth,
            store,
        })
    }

    /// Sign in as `user` with their seeded credentials so that writes pass
    /// the session gate.
    async fn act_as(&self, user: &UserId) -> Result<()> {
        let account = self
            .seed
            .accounts
            .iter()
            .find(|account| account.uid == *user)
            .with_context(|| format!("no seeded account for '{user}'"))?;
        self.auth.sign_in(&account.email, &account.password).await?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    clubhub::logging::init_tracing();
    let cli = Cli::parse();

    if let Command::Route { path } = &cli.command {
        let route: Route = path.parse()?;
        println!("{route:?}");
        println!("canonical path: {route}");
        return Ok(());
    }

    let app = App::open(&cli)?;
    let repos = app.store.repositories();

    match cli.command {
        Command::Browse { query, category } => {
            let vm = ClubBrowseViewModel::new(repos.clubs.clone(), &app.config.get().defaults.category);
            vm.activate();
            vm.store().settled().await;
            if let Some(query) = &query {
                vm.set_query(query.as_str());
            }
            if let Some(category) = &category {
                vm.set_category(category.as_str());
            }
            let state = vm
                .store()
                .wait_for(|state| {
                    query.as_ref().map_or(true, |q| state.query == *q)
                        && category.as_ref().map_or(true, |c| state.category == *c)
                })
                .await;
            println!("categories: {}", state.categories.join(", "));
            for club in &state.filtered {
                println!("{:<24} {:<12} {}", club.name, club.category, club.description);
            }
            report_error(&state);
            vm.teardown();
        }
        Command::Home { user } => {
            let vm = StudentHomeViewModel::new(
                repos,
                UserId::new(user),
                app.config.get().defaults.upcoming_window_days,
            );
            vm.activate();
            let state = vm.store().settled().await;
            println!("clubs:");
            for club in &state.clubs {
                println!("  {}", club.name);
            }
            println!("upcoming events:");
            for event in &state.events {
                let marker = if state.is_registered(&event.id) { "*" } else { " " };
                println!(
                    "{marker} {} {} @ {}",
                    event.starts_at.format("%Y-%m-%d %H:%M"),
                    event.title,
                    event.location
                );
            }
            println!("applications:");
            for application in &state.applications {
                println!("  {} ({:?})", application.club_name, application.status);
            }
            report_error(&state);
            vm.teardown();
        }
        Command::Club { user, club } => {
            let vm = ClubDetailViewModel::new(repos, UserId::new(user), ClubId::new(club));
            vm.activate();
            let state = vm.store().settled().await;
            match &state.club {
                Some(club) => {
                    println!("{} [{}]", club.name, club.category);
                    println!("{}", club.description);
                    println!("members: {}", club.members.len());
                    println!("you: {:?}", state.membership_status());
                }
                None if state.not_found => println!("club not found"),
                None => {}
            }
            for event in &state.events {
                println!("event: {} {}", event.starts_at.format("%Y-%m-%d"), event.title);
            }
            for announcement in &state.announcements {
                println!("announcement: {}", announcement.title);
            }
            report_error(&state);
            vm.teardown();
        }
        Command::Notifications {
            user,
            mark_all_read,
        } => {
            let user = UserId::new(user);
            let vm = NotificationsViewModel::new(
                repos.notifications.clone(),
                user.clone(),
                app.config.get().defaults.notification_limit,
            );
            vm.activate();
            let mut state = vm.store().settled().await;
            if mark_all_read && state.unread_count > 0 {
                app.act_as(&user).await?;
                vm.mark_all_read().await;
                state = vm
                    .store()
                    .wait_for(|state| state.unread_count == 0 || state.error().is_some())
                    .await;
            }
            println!("unread: {}", state.unread_count);
            for notification in &state.notifications {
                let marker = if notification.read { " " } else { "*" };
                println!("{marker} {} - {}", notification.title, notification.body);
            }
            report_error(&state);
            vm.teardown();
        }
        Command::Dashboard { user, club } => {
            let vm = LeaderDashboardViewModel::new(repos, UserId::new(user), ClubId::new(club));
            vm.activate();
            let state = vm.store().settled().await;
            match &state.club {
                Some(club) => println!("{} ({} members)", club.name, club.members.len()),
                None => println!("you do not lead this club"),
            }
            for request in &state.pending_requests {
                println!("request {} from {}", request.id, request.user_id);
            }
            for event in &state.events {
                println!("event {} {}", event.starts_at.format("%Y-%m-%d"), event.title);
            }
            for announcement in &state.announcements {
                println!("announcement {}", announcement.title);
            }
            report_error(&state);
            vm.teardown();
        }
        Command::Admin { user } => {
            let vm = AdminViewModel::new(repos, UserId::new(user));
            vm.activate();
            let state = vm.store().settled().await;
            println!("pending applications:");
            for application in &state.applications {
                println!(
                    "  {} {} by {}",
                    application.id, application.club_name, application.applicant_id
                );
            }
            println!("users:");
            for user in &state.users {
                let active = if user.active { "" } else { " (inactive)" };
                println!("  {:<20} {:?}{active}", user.display_name, user.role);
            }
            report_error(&state);
            vm.teardown();
        }
        Command::SignIn { email, password } => {
            let vm = AuthViewModel::new(app.auth.clone(), repos.users.clone());
            vm.activate();
            vm.store().settled().await;
            vm.sign_in(&email, &password).await;
            let state = vm.store().settled().await;
            if state.is_authenticated {
                let led_club = state.user.as_ref().and_then(|session| {
                    app.store
                        .clubs
                        .records()
                        .into_iter()
                        .find(|club| club.leader_id == session.uid)
                        .map(|club| club.id)
                });
                let route = start_for(state.user.as_ref(), state.profile.as_ref(), led_club.as_ref());
                println!("signed in (verified: {})", state.is_email_verified);
                println!("start route: {route}");
            }
            report_error(&state);
            vm.teardown();
        }
        Command::Config => {
            let config = app.config.get();
            println!("file: {}", app.config.path().display());
            println!("default category: {}", config.defaults.category);
            println!("upcoming window: {} days", config.defaults.upcoming_window_days);
            println!("notification limit: {}", config.defaults.notification_limit);
            println!("writes need a session: {}", config.store.require_session_for_writes);
        }
        Command::Route { .. } => {}
    }
    Ok(())
}

fn report_error(state: &impl UiState) {
    if let Some(error) = state.error() {
        eprintln!("error: {error}");
    }
}
