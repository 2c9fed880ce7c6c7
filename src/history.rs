// src/history.rs
//
// Loads one team's full franchise history: fetch the rendered page, extract
// the franchise_years table, cast it, and trim to the requested seasons.

use anyhow::Result;
use tracing::debug;

use crate::error::ScrapeError;
use crate::extract::extract_table;
use crate::fetch;
use crate::table::SeasonTable;
use crate::teams::Team;

/// Identifier of the historical-record table on a team page.
pub const FRANCHISE_TABLE_ID: &str = "franchise_years";

/// Fetch and parse a team's season-by-season history, optionally limited to
/// the closed interval `[start_season, end_season]`.
///
/// Passing `None` for the team is an invalid-argument error and performs no
/// network call.
pub async fn load_history(
    team: Option<Team>,
    start_season: Option<i16>,
    end_season: Option<i16>,
) -> Result<SeasonTable> {
    let team = team.ok_or(ScrapeError::MissingTeam)?;
    let url = fetch::team_record_url(team.code());
    let markup = fetch::fetch_page(&url).await?;
    parse_history(&markup, start_season, end_season)
}

/// Parse an already-fetched team page into a filtered [`SeasonTable`].
pub fn parse_history(
    markup: &str,
    start_season: Option<i16>,
    end_season: Option<i16>,
) -> Result<SeasonTable> {
    let raw = extract_table(markup, FRANCHISE_TABLE_ID)?;
    let table = SeasonTable::from_columns(&raw)?;
    debug!(rows = table.len(), "parsed franchise history");
    Ok(table.filter_seasons(start_season, end_season))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::WIN_LOSS_PERC;

    fn season_row(year: &str, win_loss_perc: &str, games_back: &str) -> String {
        format!(
            r##"<tr>
                <th data-stat="year_ID"><a href="#">{year}</a></th>
                <td data-stat="G">162</td>
                <td data-stat="W">90</td>
                <td data-stat="L">72</td>
                <td data-stat="ties">0</td>
                <td data-stat="R">750</td>
                <td data-stat="RA">680</td>
                <td data-stat="batters_used">44</td>
                <td data-stat="pitchers_used">28</td>
                <td data-stat="win_loss_perc">{win_loss_perc}</td>
                <td data-stat="win_loss_perc_pythag">0.540</td>
                <td data-stat="age_bat">27.5</td>
                <td data-stat="age_pit">28.2</td>
                <td data-stat="games_back">{games_back}</td>
            </tr>"##
        )
    }

    fn page(rows: &str) -> String {
        format!(
            r#"<html><body><table id="franchise_years"><tbody>{rows}</tbody></table></body></html>"#
        )
    }

    #[test]
    fn start_season_filter_keeps_only_later_rows() {
        let markup = page(&format!(
            "{}{}",
            season_row("2020", "0.450", "4.0"),
            season_row("2019", "0.600", "--"),
        ));
        let history = parse_history(&markup, Some(2020), None).unwrap();
        assert_eq!(history.len(), 1);
        let records = history.records();
        assert_eq!(records[0].year, 2020);
        assert_eq!(records[0].win_loss_perc, 0.450);
    }

    #[test]
    fn games_back_sentinel_becomes_zero() {
        let markup = page(&season_row("2019", "0.600", "--"));
        let history = parse_history(&markup, None, None).unwrap();
        assert_eq!(history.records()[0].games_back, 0.0);
    }

    #[test]
    fn unbounded_load_keeps_source_order() {
        let markup = page(&format!(
            "{}{}{}",
            season_row("2021", "0.500", "1.5"),
            season_row("2020", "0.450", "4.0"),
            season_row("2019", "0.600", "--"),
        ));
        let history = parse_history(&markup, None, None).unwrap();
        assert_eq!(history.years(), [2021, 2020, 2019]);
    }

    #[test]
    fn window_mean_matches_filtered_rows() {
        let markup = page(&format!(
            "{}{}{}",
            season_row("2021", "0.500", "1.5"),
            season_row("2020", "0.450", "4.0"),
            season_row("2019", "0.600", "--"),
        ));
        let history = parse_history(&markup, Some(2020), Some(2021)).unwrap();
        let mean = history.mean(WIN_LOSS_PERC).unwrap();
        assert!((mean - 0.475).abs() < 1e-6);
    }

    #[tokio::test]
    async fn missing_team_is_rejected_before_any_fetch() {
        let err = load_history(None, Some(1998), Some(2024)).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScrapeError>(),
            Some(ScrapeError::MissingTeam)
        ));
    }
}
