use crate::application::ports::util::SlugGenerator;

/// Slugs via the `slug` crate: lowercase ASCII words joined by `-`.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_team_names() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Data Science"), "data-science");
        assert_eq!(slugger.slugify("  Platform & Infra "), "platform-infra");
    }
}
