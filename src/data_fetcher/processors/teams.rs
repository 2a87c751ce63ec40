use crate::data_fetcher::models::TeamDirectoryEntry;
use crate::data_fetcher::processors::json_path::{
    get_i64, get_or_default, get_path, get_string, require_i64,
};
use crate::error::AppError;
use serde_json::Value;

/// Reads `teams[]` of the team directory endpoint. Teams without an id fail
/// the directory; every other field is optional.
pub fn extract_team_directory(
    document: &Value,
    season: i32,
) -> Result<Vec<TeamDirectoryEntry>, AppError> {
    let teams = get_path(document, &["teams"])
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    teams
        .iter()
        .map(|team| {
            Ok(TeamDirectoryEntry {
                team_id: require_i64(team, &["id"], "team directory")?,
                team_full_name: get_string(team, &["name"]),
                team_link: get_string(team, &["link"]),
                season,
                team_venue_id: get_i64(team, &["venue", "id"]),
                team_venue_name: get_string(team, &["venue", "name"]),
                team_venue_link: get_string(team, &["venue", "link"]),
                team_code: get_string(team, &["teamCode"]),
                file_code: get_string(team, &["fileCode"]),
                team_abbreviation: get_string(team, &["abbreviation"]),
                team_nickname: get_string(team, &["teamName"]),
                team_location: get_string(team, &["locationName"]),
                first_year_of_play: get_i64(team, &["firstYearOfPlay"])
                    .and_then(|year| i32::try_from(year).ok()),
                league_id: get_i64(team, &["league", "id"]),
                league_name: get_string(team, &["league", "name"]),
                league_link: get_string(team, &["league", "link"]),
                division_id: get_i64(team, &["division", "id"]),
                division_name: get_string(team, &["division", "name"]),
                division_link: get_string(team, &["division", "link"]),
                sport_id: get_i64(team, &["sport", "id"]),
                sport_name: get_string(team, &["sport", "name"]),
                sport_link: get_string(team, &["sport", "link"]),
                team_short_name: get_string(team, &["shortName"]),
                parent_org_name: get_string(team, &["parentOrgName"]),
                parent_org_id: get_i64(team, &["parentOrgId"]),
                franchise_name: get_string(team, &["franchiseName"]),
                club_name: get_string(team, &["clubName"]),
                is_active_team: get_or_default(team, &["active"], false),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::team_ids_for_sport;
    use serde_json::json;

    #[test]
    fn test_extract_team_directory() {
        let document = json!({
            "teams": [
                {
                    "id": 534, "name": "Durham Bulls", "abbreviation": "DUR",
                    "firstYearOfPlay": "1998", "active": true,
                    "sport": {"id": 11, "name": "Triple-A"},
                    "parentOrgId": 139, "parentOrgName": "Tampa Bay Rays"
                },
                {"id": 233, "sport": {"id": 12}},
                {"id": 9001, "name": "College Club", "sport": {"id": 22}}
            ]
        });
        let teams = extract_team_directory(&document, 2024).unwrap();
        assert_eq!(teams.len(), 3);
        assert_eq!(teams[0].first_year_of_play, Some(1998));
        assert!(teams[0].is_active_team);
        assert_eq!(teams[2].parent_org_id, None);
        assert!(!teams[2].is_active_team);
        assert_eq!(team_ids_for_sport(&teams, 11), vec![534]);
        assert_eq!(team_ids_for_sport(&teams, 12), vec![233]);
    }

    #[test]
    fn test_team_without_id_fails() {
        let document = json!({"teams": [{"name": "Nameless"}]});
        assert!(extract_team_directory(&document, 2024).is_err());
    }
}
