//! User display model

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::client::models::UserProfile;
use crate::error::Result;
use crate::output::{Formattable, json, table};

/// User display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UserDisplay {
    #[tabled(rename = "USER ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "ACTIVE")]
    pub active: bool,
}

impl From<UserProfile> for UserDisplay {
    fn from(user: UserProfile) -> Self {
        Self {
            id: user.user_id,
            name: user.name,
            email: user.email,
            active: user.is_active,
        }
    }
}

impl Formattable for UserDisplay {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Table => Ok(table::format_table(std::slice::from_ref(self), "")),
            OutputFormat::Pretty => {
                let status = if self.active {
                    "active".green()
                } else {
                    "inactive".red()
                };
                Ok(format!(
                    "{} <{}>\n  ID: {}\n  Status: {}",
                    self.name.bold(),
                    self.email,
                    self.id.dimmed(),
                    status
                ))
            }
        }
    }
}
