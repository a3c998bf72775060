use std::fs;
use std::io;
use std::path::Path;

use crate::models::{Roster, RosterData};

/// Load the roster from a TOML file.
/// An absent file yields the built-in sample roster; the roster is read
/// only, nothing is ever written back.
pub fn load_roster(path: &Path) -> io::Result<Roster> {
    if !path.exists() {
        return Ok(Roster::sample());
    }

    let content = fs::read_to_string(path)?;
    let data: RosterData =
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(Roster::from_data(data))
}
