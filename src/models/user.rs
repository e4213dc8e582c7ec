// src/models/user.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of departments a user can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    #[serde(rename = "Human Resources")]
    HumanResources,
    Sales,
    Marketing,
    #[serde(rename = "Product Development")]
    ProductDevelopment,
    #[serde(rename = "Customer Support")]
    CustomerSupport,
    #[serde(rename = "IT")]
    It,
    Finance,
    #[serde(rename = "Legal & Compliance")]
    Legal,
}

impl Team {
    pub const ALL: [Team; 8] = [
        Team::HumanResources,
        Team::Sales,
        Team::Marketing,
        Team::ProductDevelopment,
        Team::CustomerSupport,
        Team::It,
        Team::Finance,
        Team::Legal,
    ];
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Team::HumanResources => "Human Resources",
            Team::Sales => "Sales",
            Team::Marketing => "Marketing",
            Team::ProductDevelopment => "Product Development",
            Team::CustomerSupport => "Customer Support",
            Team::It => "IT",
            Team::Finance => "Finance",
            Team::Legal => "Legal & Compliance",
        };
        write!(f, "{}", name)
    }
}

/// A member of the roster. `role` is the job title, free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub team: Team,
}

/// Create payload: a user minus its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDraft {
    pub email: String,
    pub name: String,
    pub role: String,
    pub team: Team,
}

impl UserDraft {
    pub fn into_user(self, id: String) -> User {
        User {
            id,
            email: self.email,
            name: self.name,
            role: self.role,
            team: self.team,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
}

impl User {
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(team) = patch.team {
            self.team = team;
        }
    }
}
