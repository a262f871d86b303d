//! Roster files and generated rosters.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};

use hoops_core::models::generator::random_roster;
use hoops_core::models::roster::TeamId;
use hoops_core::TeamRoster;

/// Where a team comes from: a file on disk, or the generator.
#[derive(Debug, Clone, PartialEq)]
pub enum TeamSource {
    File(PathBuf),
    Generated { id: TeamId, name: String, overall: u8 },
}

impl TeamSource {
    pub fn pick(file: Option<PathBuf>, id: TeamId, name: &str, overall: u8) -> Self {
        match file {
            Some(path) => TeamSource::File(path),
            None => TeamSource::Generated { id, name: name.to_string(), overall },
        }
    }

    /// Generated rosters mix the team id into the seed so both sides differ.
    pub fn load(&self, seed: u64) -> Result<TeamRoster> {
        match self {
            TeamSource::File(path) => load(path),
            TeamSource::Generated { id, name, overall } => {
                Ok(generate(*id, name, *overall, seed.wrapping_add(*id as u64)))
            }
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("yaml") | Some("yml"))
}

pub fn generate(id: TeamId, name: &str, overall: u8, seed: u64) -> TeamRoster {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_roster(id, name, overall, &mut rng)
}

pub fn load(path: &Path) -> Result<TeamRoster> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading roster {}", path.display()))?;
    let roster = if is_yaml(path) {
        serde_yaml::from_str(&text).with_context(|| format!("parsing YAML roster {}", path.display()))?
    } else {
        serde_json::from_str(&text).with_context(|| format!("parsing JSON roster {}", path.display()))?
    };
    Ok(roster)
}

pub fn save(roster: &TeamRoster, path: &Path) -> Result<()> {
    let text = if is_yaml(path) {
        serde_yaml::to_string(roster)?
    } else {
        serde_json::to_string_pretty(roster)?
    };
    std::fs::write(path, text).with_context(|| format!("writing roster {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_and_yaml_files_load_the_same_roster() {
        let dir = tempfile::tempdir().unwrap();
        let roster = generate(3, "Harbor", 72, 9);

        let json = dir.path().join("harbor.json");
        let yaml = dir.path().join("harbor.yaml");
        save(&roster, &json).unwrap();
        save(&roster, &yaml).unwrap();

        assert_eq!(load(&json).unwrap(), roster);
        assert_eq!(load(&yaml).unwrap(), roster);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load(Path::new("/nonexistent/team.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/team.json"));
    }

    #[test]
    fn generated_sides_differ_but_repeat() {
        let home = TeamSource::pick(None, 1, "Home", 75);
        let away = TeamSource::pick(None, 2, "Away", 75);
        let h = home.load(5).unwrap();
        assert_eq!(h, home.load(5).unwrap());
        let a = away.load(5).unwrap();
        assert_ne!(h.players[0].attributes, a.players[0].attributes);
    }
}
