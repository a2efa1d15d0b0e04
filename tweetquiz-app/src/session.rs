//! One game from start to finish: settings, fetching, then the quiz.
use crate::Flags;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Duration;
use tweetquiz_common::{AccountPair, QuizError};
use tweetquiz_config::{AccountsConfig, CredentialsConfig, QuizConfig, QuizConfigLoader};
use tweetquiz_game::{Console, Pacing, QuizEngine, QuizPools, Scoreboard};
use tweetquiz_social::twitter::{OAuthCredentials, TimelineSource, TwitterApi, harvest_account};

pub fn load_config(path: Option<&Path>) -> Result<QuizConfig> {
    let loader = QuizConfigLoader::new();
    let loader = match path {
        Some(p) => loader.with_file(p),
        None => match tweetquiz_config::default_config_path() {
            Some(p) => loader.with_optional_file(p),
            None => loader,
        },
    };
    loader.load().context("loading configuration")
}

/// Flags layered over the config file.
#[derive(Debug, PartialEq)]
struct Settings {
    /// `None` means ask on the console.
    accounts: Option<AccountPair>,
    rounds: Option<u32>,
    pacing: Pacing,
    show_stats: bool,
}

impl Settings {
    fn resolve(flags: &Flags, cfg: &QuizConfig) -> Result<Self, QuizError> {
        let accounts = AccountsConfig {
            first: flags.first.clone().or_else(|| cfg.accounts.first.clone()),
            second: flags.second.clone().or_else(|| cfg.accounts.second.clone()),
        }
        .pair();

        if let Some(pair) = accounts.as_ref().filter(|p| p.is_same_account()) {
            return Err(QuizError::Config(format!(
                "both accounts are @{}; pick two different accounts",
                pair.first
            )));
        }

        let pacing = if flags.no_delay {
            Pacing::none()
        } else {
            Pacing::new(Duration::from_millis(cfg.round_delay_ms))
        };

        Ok(Self {
            accounts,
            rounds: flags.rounds.or(cfg.rounds),
            pacing,
            show_stats: flags.stats || cfg.show_stats,
        })
    }
}

fn oauth_credentials(c: &CredentialsConfig) -> OAuthCredentials {
    OAuthCredentials {
        consumer_key: c.api_key.clone(),
        consumer_secret: c.api_secret.clone(),
        access_token: c.access_token.clone(),
        access_secret: c.access_secret.clone(),
    }
}

/// Signed client for `api_base`. Fails before any request when a credential is missing.
fn twitter_api(cfg: &QuizConfig) -> Result<TwitterApi> {
    cfg.credentials.validate()?;
    Ok(
        TwitterApi::with_base_url(&cfg.api_base, oauth_credentials(&cfg.credentials))?
            .with_timeout(Duration::from_secs(cfg.request_timeout_secs)),
    )
}

pub async fn run(flags: &Flags, cfg: QuizConfig) -> Result<()> {
    let settings = Settings::resolve(flags, &cfg)?;
    let api = twitter_api(&cfg)?;

    let mut console = Console::stdio();
    let board = play_session(settings, &api, &mut console, &mut rand::thread_rng()).await?;

    tracing::info!(rounds = board.rounds, correct = board.correct, "session.done");
    Ok(())
}

/// Banner, accounts, harvest A then B, optional stats, then the quiz.
async fn play_session<S, R, W, G>(
    settings: Settings,
    source: &S,
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<Scoreboard>
where
    S: TimelineSource + ?Sized,
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    console.intro()?;
    let pair = match settings.accounts {
        Some(pair) => pair,
        None => console.ask_accounts()?,
    };
    tracing::info!(first = %pair.first, second = %pair.second, "session.accounts");

    console.fetching(&pair)?;
    let first = harvest_account(source, &pair.first).await?;
    let second = harvest_account(source, &pair.second).await?;

    if settings.show_stats {
        console.say("Here are the scraping stats -")?;
        for harvest in [&first, &second] {
            console.scrape_stats(&harvest.account, harvest.fetched, harvest.eligible())?;
        }
    }
    console.ready()?;

    let pools = QuizPools::new(pair, first.texts, second.texts);
    let board = QuizEngine::new(&pools, settings.pacing).play(console, rng, settings.rounds)?;
    Ok(board)
}
