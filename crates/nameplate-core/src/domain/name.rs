use crate::error::CoreError;

/// Linking words kept lowercase inside a full name.
pub const DEFAULT_PARTICLES: [&str; 5] = ["da", "de", "do", "das", "dos"];

/// Turns free-form input into the canonical display form of a name.
///
/// Words are separated by single spaces and title-cased, except for the
/// configured particles which stay lowercase: `"  joão   DA   silva "`
/// becomes `"João da Silva"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameStandardizer {
    // Stored title-cased so a word is compared after its own title-casing.
    particles: Vec<String>,
}

impl Default for NameStandardizer {
    fn default() -> Self {
        Self {
            particles: DEFAULT_PARTICLES
                .iter()
                .map(|particle| title_case_word(particle))
                .collect(),
        }
    }
}

impl NameStandardizer {
    pub fn new<I, S>(particles: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for raw in particles {
            let raw = raw.as_ref();
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
                return Err(CoreError::InvalidParticle(raw.to_string()));
            }
            let titled = title_case_word(&trimmed.to_lowercase());
            if normalized.contains(&titled) {
                return Err(CoreError::InvalidParticle(raw.to_string()));
            }
            normalized.push(titled);
        }
        Ok(Self {
            particles: normalized,
        })
    }

    /// Lowercase forms of the configured particles.
    pub fn particles(&self) -> Vec<String> {
        self.particles
            .iter()
            .map(|particle| particle.to_lowercase())
            .collect()
    }

    pub fn standardize(&self, raw: &str) -> String {
        let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        let lowered = collapsed.to_lowercase();

        lowered
            .split_whitespace()
            .map(title_case_word)
            .map(|word| {
                if self.particles.contains(&word) {
                    word.to_lowercase()
                } else {
                    word
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Uppercases the first character of `word` and lowercases the rest.
///
/// Only the first character of the whole token is touched, so `ana-maria`
/// becomes `Ana-maria`. When the uppercase mapping expands (`ß` -> `SS`)
/// only its first character stays uppercase.
pub fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(word.len());
    let mut upper = first.to_uppercase();
    if let Some(head) = upper.next() {
        out.push(head);
    }
    out.extend(upper.flat_map(char::to_lowercase));
    out.push_str(&chars.as_str().to_lowercase());
    out
}

#[cfg(test)]
mod tests {
    use super::{title_case_word, NameStandardizer};
    use crate::error::CoreError;

    #[test]
    fn standardize_collapses_whitespace_and_lowercases_particles() {
        let names = NameStandardizer::default();
        assert_eq!(names.standardize("  joão   DA   silva "), "João da Silva");
        assert_eq!(names.standardize("MARIA DOS SANTOS"), "Maria dos Santos");
    }

    #[test]
    fn standardize_handles_tabs_and_newlines() {
        let names = NameStandardizer::default();
        assert_eq!(names.standardize("ana\tde\n\nsouza"), "Ana de Souza");
    }

    #[test]
    fn standardize_empty_input_yields_empty_string() {
        let names = NameStandardizer::default();
        assert_eq!(names.standardize(""), "");
        assert_eq!(names.standardize(" \t\n "), "");
    }

    #[test]
    fn standardize_only_capitalizes_first_character_of_token() {
        let names = NameStandardizer::default();
        assert_eq!(names.standardize("ANA-MARIA d'avila"), "Ana-maria D'avila");
    }

    #[test]
    fn standardize_keeps_particle_lookalikes_title_cased() {
        let names = NameStandardizer::default();
        assert_eq!(names.standardize("dora dom das"), "Dora Dom das");
    }

    #[test]
    fn standardize_lowercases_particle_at_start() {
        let names = NameStandardizer::default();
        assert_eq!(names.standardize("DE souza"), "de Souza");
    }

    #[test]
    fn custom_particles_replace_defaults() {
        let names = NameStandardizer::new(["van", "DER"]).expect("particles");
        assert_eq!(
            names.standardize("LUDWIG VAN DER berg da"),
            "Ludwig van der Berg Da"
        );
        assert_eq!(names.particles(), vec!["van", "der"]);
    }

    #[test]
    fn new_rejects_blank_spaced_and_duplicate_particles() {
        assert_eq!(
            NameStandardizer::new([" "]),
            Err(CoreError::InvalidParticle(" ".to_string()))
        );
        assert!(NameStandardizer::new(["de la"]).is_err());
        assert!(NameStandardizer::new(["da", "DA"]).is_err());
    }

    #[test]
    fn title_case_word_handles_expanding_uppercase() {
        assert_eq!(title_case_word("ßa"), "Ssa");
        assert_eq!(title_case_word("élan"), "Élan");
        assert_eq!(title_case_word(""), "");
    }
}
