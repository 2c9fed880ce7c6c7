// src/teams.rs
//
// The 30 MLB franchises and their baseball-reference team codes. Codes are
// the historical franchise codes the site keys team pages by (e.g. the
// Marlins live under FLA, the Rays under TBD).

/// One franchise in the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    Angels,
    Diamondbacks,
    Braves,
    Orioles,
    RedSox,
    Cubs,
    WhiteSox,
    Reds,
    Guardians,
    Rockies,
    Tigers,
    Marlins,
    Astros,
    Royals,
    Dodgers,
    Brewers,
    Twins,
    Mets,
    Yankees,
    Athletics,
    Phillies,
    Pirates,
    Padres,
    Mariners,
    Giants,
    Cardinals,
    Rays,
    Rangers,
    BlueJays,
    Nationals,
}

impl Team {
    /// Catalog order. This order is also the key order of the summary file.
    pub const ALL: [Team; 30] = [
        Team::Angels,
        Team::Diamondbacks,
        Team::Braves,
        Team::Orioles,
        Team::RedSox,
        Team::Cubs,
        Team::WhiteSox,
        Team::Reds,
        Team::Guardians,
        Team::Rockies,
        Team::Tigers,
        Team::Marlins,
        Team::Astros,
        Team::Royals,
        Team::Dodgers,
        Team::Brewers,
        Team::Twins,
        Team::Mets,
        Team::Yankees,
        Team::Athletics,
        Team::Phillies,
        Team::Pirates,
        Team::Padres,
        Team::Mariners,
        Team::Giants,
        Team::Cardinals,
        Team::Rays,
        Team::Rangers,
        Team::BlueJays,
        Team::Nationals,
    ];

    /// Short code used in the team page URL.
    pub fn code(self) -> &'static str {
        match self {
            Team::Angels => "ANA",
            Team::Diamondbacks => "ARI",
            Team::Braves => "ATL",
            Team::Orioles => "BAL",
            Team::RedSox => "BOS",
            Team::Cubs => "CHC",
            Team::WhiteSox => "CHW",
            Team::Reds => "CIN",
            Team::Guardians => "CLE",
            Team::Rockies => "COL",
            Team::Tigers => "DET",
            Team::Marlins => "FLA",
            Team::Astros => "HOU",
            Team::Royals => "KCR",
            Team::Dodgers => "LAD",
            Team::Brewers => "MIL",
            Team::Twins => "MIN",
            Team::Mets => "NYM",
            Team::Yankees => "NYY",
            Team::Athletics => "OAK",
            Team::Phillies => "PHI",
            Team::Pirates => "PIT",
            Team::Padres => "SDP",
            Team::Mariners => "SEA",
            Team::Giants => "SFG",
            Team::Cardinals => "STL",
            Team::Rays => "TBD",
            Team::Rangers => "TEX",
            Team::BlueJays => "TOR",
            Team::Nationals => "WSN",
        }
    }

    /// Display name, used as the key in the summary file.
    pub fn name(self) -> &'static str {
        match self {
            Team::Angels => "ANGELS",
            Team::Diamondbacks => "DIAMONDBACKS",
            Team::Braves => "BRAVES",
            Team::Orioles => "ORIOLES",
            Team::RedSox => "RED_SOX",
            Team::Cubs => "CUBS",
            Team::WhiteSox => "WHITE_SOX",
            Team::Reds => "REDS",
            Team::Guardians => "GUARDIANS",
            Team::Rockies => "ROCKIES",
            Team::Tigers => "TIGERS",
            Team::Marlins => "MARLINS",
            Team::Astros => "ASTROS",
            Team::Royals => "ROYALS",
            Team::Dodgers => "DODGERS",
            Team::Brewers => "BREWERS",
            Team::Twins => "TWINS",
            Team::Mets => "METS",
            Team::Yankees => "YANKEES",
            Team::Athletics => "ATHLETICS",
            Team::Phillies => "PHILLIES",
            Team::Pirates => "PIRATES",
            Team::Padres => "PADRES",
            Team::Mariners => "MARINERS",
            Team::Giants => "GIANTS",
            Team::Cardinals => "CARDINALS",
            Team::Rays => "RAYS",
            Team::Rangers => "RANGERS",
            Team::BlueJays => "BLUE_JAYS",
            Team::Nationals => "NATIONALS",
        }
    }

    /// Render the catalog as `NAME: CODE` lines, one per team.
    pub fn show_options() -> String {
        Team::ALL
            .iter()
            .map(|t| format!("{}: {}", t.name(), t.code()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_thirty_teams() {
        assert_eq!(Team::ALL.len(), 30);
    }

    #[test]
    fn show_options_lists_every_team_in_order() {
        let listing = Team::show_options();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 30);
        assert_eq!(lines[0], "ANGELS: ANA");
        assert_eq!(lines[1], "DIAMONDBACKS: ARI");
        assert_eq!(lines[29], "NATIONALS: WSN");
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<&str> = Team::ALL.iter().map(|t| t.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 30);
    }
}
