use serde::Deserialize;

use matchday_core::league::{Error, Team};

/// Request payload for registering a new team.
#[derive(Debug, Deserialize)]
pub struct CreateTeam {
    pub name: String,
    pub manager: String,
    pub stadium: String,
    pub color: String,
    #[serde(default)]
    pub nickname: Option<String>,
}

impl CreateTeam {
    /// Rejects blank required fields.
    pub fn validate(&self) -> Result<(), Error> {
        for (field, value) in [
            ("name", &self.name),
            ("manager", &self.manager),
            ("stadium", &self.stadium),
            ("color", &self.color),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Validation(format!("{field} is required")));
            }
        }
        Ok(())
    }

    /// Converts the request into a Team record.
    pub fn into_team(self) -> Team {
        let team = Team::new(self.name, self.manager, self.stadium, self.color);
        match self.nickname {
            Some(nickname) if !nickname.trim().is_empty() => team.with_nickname(nickname),
            _ => team,
        }
    }
}

/// Request payload for updating a team. Unset fields keep their values.
#[derive(Debug, Deserialize)]
pub struct UpdateTeam {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub manager: Option<String>,
    #[serde(default)]
    pub stadium: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
}

impl UpdateTeam {
    /// Applies the update to a loaded team, lowercasing like creation does.
    pub fn apply_to(self, team: &mut Team) {
        if let Some(name) = self.name {
            team.name = name.to_lowercase();
        }
        if let Some(manager) = self.manager {
            team.manager = manager.to_lowercase();
        }
        if let Some(stadium) = self.stadium {
            team.stadium = stadium.to_lowercase();
        }
        if let Some(color) = self.color {
            team.color = color.to_lowercase();
        }
        if let Some(nickname) = self.nickname {
            team.nickname = Some(nickname.to_lowercase());
        }
    }
}

/// Pagination query parameters shared by listing endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Search endpoint query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}
