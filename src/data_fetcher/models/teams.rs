use serde::Serialize;

/// One team in the season directory. College and independent clubs have no
/// parent organization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamDirectoryEntry {
    pub team_id: i64,
    pub team_full_name: Option<String>,
    pub team_link: Option<String>,
    pub season: i32,
    pub team_venue_id: Option<i64>,
    pub team_venue_name: Option<String>,
    pub team_venue_link: Option<String>,
    pub team_code: Option<String>,
    pub file_code: Option<String>,
    pub team_abbreviation: Option<String>,
    pub team_nickname: Option<String>,
    pub team_location: Option<String>,
    pub first_year_of_play: Option<i32>,
    pub league_id: Option<i64>,
    pub league_name: Option<String>,
    pub league_link: Option<String>,
    pub division_id: Option<i64>,
    pub division_name: Option<String>,
    pub division_link: Option<String>,
    pub sport_id: Option<i64>,
    pub sport_name: Option<String>,
    pub sport_link: Option<String>,
    pub team_short_name: Option<String>,
    pub parent_org_name: Option<String>,
    pub parent_org_id: Option<i64>,
    pub franchise_name: Option<String>,
    pub club_name: Option<String>,
    pub is_active_team: bool,
}

/// Ids of the teams playing at `sport_id`, in directory order.
pub fn team_ids_for_sport(teams: &[TeamDirectoryEntry], sport_id: u32) -> Vec<i64> {
    teams
        .iter()
        .filter(|team| team.sport_id == Some(i64::from(sport_id)))
        .map(|team| team.team_id)
        .collect()
}
