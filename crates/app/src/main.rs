use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use hub_core::model::{Collection, CollectionId, CollectionStatus, RepoItem, SiteConfig, UserId};
use hub_core::time::Clock;
use services::{CollectionService, ShareService, SystemClipboard};
use storage::{ApiConfig, InMemoryRepository, Storage};
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt, prelude::*};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidUserId { flag: &'static str, raw: String },
    InvalidSite { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidUserId { flag, raw } => write!(f, "invalid {flag} value: {raw:?}"),
            ArgsError::InvalidSite { raw } => write!(f, "invalid --site value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_user(raw: String, flag: &'static str) -> Result<UserId, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidUserId { flag, raw })
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

struct DesktopApp {
    collections: Arc<CollectionService>,
    share: Arc<ShareService>,
    viewer: Option<UserId>,
    owner: UserId,
    initial_collection: Option<String>,
}

impl UiApp for DesktopApp {
    fn collection_service(&self) -> Arc<CollectionService> {
        Arc::clone(&self.collections)
    }

    fn share_service(&self) -> Arc<ShareService> {
        Arc::clone(&self.share)
    }

    fn viewer(&self) -> Option<UserId> {
        self.viewer.clone()
    }

    fn default_owner(&self) -> UserId {
        self.owner.clone()
    }

    fn initial_collection(&self) -> Option<String> {
        self.initial_collection.clone()
    }
}

struct Args {
    api: Option<ApiConfig>,
    site: SiteConfig,
    owner: UserId,
    viewer: Option<UserId>,
    collection: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--api <url>] [--site <url>] [--uid <owner>] [--viewer <uid>] [--fid <id>]"
    );
    eprintln!();
    eprintln!("Without --api the app runs against a local demo store.");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --site {}", SiteConfig::default().base());
    eprintln!("  --uid {DEMO_OWNER}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  HUB_API_URL, HUB_API_TOKEN, HUB_SITE_URL, HUB_USER_ID, HUB_VIEWER_ID, RUST_LOG");
}

const DEMO_OWNER: &str = "demo";

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api = ApiConfig::from_env();
        let mut site = match env_value("HUB_SITE_URL") {
            Some(raw) => SiteConfig::new(&raw).map_err(|_| ArgsError::InvalidSite { raw })?,
            None => SiteConfig::default(),
        };
        let mut owner =
            UserId::new(env_value("HUB_USER_ID").unwrap_or_else(|| DEMO_OWNER.into()));
        let mut viewer = env_value("HUB_VIEWER_ID").map(UserId::new);
        let mut collection = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api" => {
                    let value = require_value(args, "--api")?;
                    let token = api.take().and_then(|config| config.token);
                    let mut config = ApiConfig::new(value);
                    config.token = token;
                    api = Some(config);
                }
                "--site" => {
                    let value = require_value(args, "--site")?;
                    site = SiteConfig::new(&value)
                        .map_err(|_| ArgsError::InvalidSite { raw: value.clone() })?;
                }
                "--uid" => owner = parse_user(require_value(args, "--uid")?, "--uid")?,
                "--viewer" => {
                    viewer = Some(parse_user(require_value(args, "--viewer")?, "--viewer")?);
                }
                "--fid" => {
                    let value = require_value(args, "--fid")?;
                    collection = Some(value.trim().to_owned()).filter(|fid| !fid.is_empty());
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            api,
            site,
            owner,
            viewer,
            collection,
        })
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(tracing_fmt::layer())
        .with(filter)
        .try_init();
}

/// A small offline store so the app is usable without an API.
fn demo_storage(
    owner: &UserId,
    viewer: Option<&UserId>,
) -> Result<Storage, Box<dyn std::error::Error>> {
    let repo = InMemoryRepository::with_clock(Clock::default_clock());
    let stamp = Clock::default_clock().server_stamp();
    repo.insert_collection(
        owner,
        Collection::new(
            CollectionId::new("1"),
            "Go libs",
            Some("Libraries worth keeping an eye on".into()),
            CollectionStatus::Public,
            stamp.clone(),
            0,
        )?,
    )?;
    repo.insert_collection(
        owner,
        Collection::new(
            CollectionId::new("2"),
            "drafts",
            None,
            CollectionStatus::Private,
            stamp,
            0,
        )?,
    )?;
    repo.set_members(
        &CollectionId::new("1"),
        vec![RepoItem {
            rid: "gin".into(),
            name: "gin".into(),
            full_name: "gin-gonic/gin".into(),
            description: "**Fast** HTTP web framework".into(),
            primary_lang: Some("Go".into()),
            stars: 78_000,
            github_url: "https://github.com/gin-gonic/gin".into(),
        }],
    )?;
    repo.set_viewer(viewer.cloned())?;
    Ok(Storage {
        collections: Arc::new(repo),
    })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let storage = match parsed.api.clone() {
        Some(config) => {
            tracing::info!(api = %config.base_url, "using remote collection api");
            Storage::http(config)
        }
        None => {
            tracing::info!(owner = %parsed.owner, "no api configured, using demo store");
            demo_storage(&parsed.owner, parsed.viewer.as_ref())?
        }
    };

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        collections: Arc::new(CollectionService::new(storage.collections)),
        share: Arc::new(ShareService::new(parsed.site, Arc::new(SystemClipboard))),
        viewer: parsed.viewer,
        owner: parsed.owner,
        initial_collection: parsed.collection,
    });
    let context = build_app_context(&app);

    // Some dev setups default the window to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Collections")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
