use anyhow::Result;
use brefscraper::{
    history::load_history,
    summary::{write_summary, Summary, SUMMARY_PATH},
    table::WIN_LOSS_PERC,
    teams::Team,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

const START_SEASON: i16 = 1998;
const END_SEASON: i16 = 2024;

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) fetch + aggregate every team, in catalog order ───────────
    let mut summary = Summary::new();
    for team in Team::ALL {
        info!("Fetching data for {} ({})", team.name(), team.code());
        let history = load_history(Some(team), Some(START_SEASON), Some(END_SEASON)).await?;
        let avg = history.mean(WIN_LOSS_PERC);
        match avg {
            Some(v) => info!("{}  Average Win %: {:.3}", team.name(), v),
            None => warn!(
                "{}: no seasons in {}..={}",
                team.name(),
                START_SEASON,
                END_SEASON
            ),
        }
        summary.record(team.name(), avg);
    }

    // ─── 3) write the summary once, at the end ───────────────────────
    write_summary(SUMMARY_PATH, &summary)?;
    info!("wrote {} teams to {}", summary.len(), SUMMARY_PATH);
    Ok(())
}
