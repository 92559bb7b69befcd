use shiori::prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_preserves_polarities() {
        let selection = TagSelection::parse_query("magic,-romance,~isekai");

        assert_eq!(selection.len(), 3);
        assert_eq!(selection.polarity_of("magic"), Some(Polarity::Include));
        assert_eq!(selection.polarity_of("romance"), Some(Polarity::Exclude));
        assert_eq!(selection.polarity_of("isekai"), Some(Polarity::Neutral));
    }

    #[test]
    fn test_parse_query_skips_empty_entries() {
        let selection = TagSelection::parse_query(",magic,,-romance,");
        assert_eq!(selection.len(), 2);

        let empty = TagSelection::parse_query("");
        assert!(empty.is_empty());

        // A bare prefix carries no tag name.
        let bare_prefix = TagSelection::parse_query("-,~");
        assert!(bare_prefix.is_empty());
    }

    #[test]
    fn test_parse_query_keeps_first_duplicate() {
        let selection = TagSelection::parse_query("magic,-magic,~magic");

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.polarity_of("magic"), Some(Polarity::Include));
    }

    #[test]
    fn test_url_round_trip() {
        // Serializing the parsed state must reproduce the URL's tag list.
        let selection = TagSelection::parse_query("magic,-romance,adventure");
        assert_eq!(
            selection.serialize().as_deref(),
            Some("magic,-romance,adventure")
        );
    }

    #[test]
    fn test_cycle_single_step() {
        let mut selection = TagSelection::parse_query("magic");

        selection.cycle("magic");
        assert_eq!(selection.polarity_of("magic"), Some(Polarity::Exclude));

        selection.cycle("magic");
        assert_eq!(selection.polarity_of("magic"), Some(Polarity::Neutral));
    }

    #[test]
    fn test_cycle_is_closed_with_period_three() {
        for start in ["magic", "-magic", "~magic"] {
            let mut selection = TagSelection::parse_query(start);
            let original = selection.polarity_of("magic");

            selection.cycle("magic");
            selection.cycle("magic");
            selection.cycle("magic");

            assert_eq!(selection.polarity_of("magic"), original);
        }
    }

    #[test]
    fn test_cycle_preserves_position() {
        let mut selection = TagSelection::parse_query("magic,-romance,adventure");
        selection.cycle("romance");

        let names: Vec<&str> = selection.tokens().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["magic", "romance", "adventure"]);
        assert_eq!(selection.polarity_of("romance"), Some(Polarity::Neutral));
    }

    #[test]
    fn test_cycle_unknown_tag_is_noop() {
        let mut selection = TagSelection::parse_query("magic");
        selection.cycle("romance");

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.polarity_of("magic"), Some(Polarity::Include));
    }

    #[test]
    fn test_commit_appends_new_tag_as_include() {
        let mut selection = TagSelection::new();
        let name = selection.commit("magic");

        assert_eq!(name, "magic");
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.polarity_of("magic"), Some(Polarity::Include));
    }

    #[test]
    fn test_commit_toggles_to_include_without_duplicating() {
        let mut selection = TagSelection::parse_query("-romance,~isekai");

        selection.commit("romance");
        selection.commit("isekai");

        assert_eq!(selection.len(), 2);
        assert_eq!(selection.polarity_of("romance"), Some(Polarity::Include));
        assert_eq!(selection.polarity_of("isekai"), Some(Polarity::Include));
    }

    #[test]
    fn test_commit_on_included_tag_is_stable() {
        let mut selection = TagSelection::parse_query("magic");
        selection.commit("magic");

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.polarity_of("magic"), Some(Polarity::Include));
    }

    #[test]
    fn test_commit_strips_count_decoration() {
        let mut selection = TagSelection::new();
        let name = selection.commit("romance (412)");

        assert_eq!(name, "romance");
        assert_eq!(selection.polarity_of("romance"), Some(Polarity::Include));
        assert!(!selection.contains("romance (412)"));
    }

    #[test]
    fn test_commit_empty_entry_adds_nothing() {
        let mut selection = TagSelection::new();

        selection.commit("");
        selection.commit(" (12)");

        assert!(selection.is_empty());
    }

    #[test]
    fn test_seed_neutral_skips_present_tags() {
        let mut selection = TagSelection::parse_query("magic,-romance,~isekai");

        // Already present under some polarity: seeding must not duplicate.
        selection.seed_neutral("magic");
        selection.seed_neutral("romance");
        selection.seed_neutral("isekai");
        assert_eq!(selection.len(), 3);

        selection.seed_neutral("drama");
        assert_eq!(selection.len(), 4);
        assert_eq!(selection.polarity_of("drama"), Some(Polarity::Neutral));
    }

    #[test]
    fn test_serialize_omits_neutral_tags() {
        let mut selection = TagSelection::parse_query("magic,-romance");
        selection.seed_neutral("isekai");

        assert_eq!(selection.serialize().as_deref(), Some("magic,-romance"));
    }

    #[test]
    fn test_serialize_empty_and_neutral_only() {
        assert_eq!(TagSelection::new().serialize(), None);

        let mut neutral_only = TagSelection::new();
        neutral_only.seed_neutral("isekai");
        neutral_only.seed_neutral("drama");
        assert_eq!(neutral_only.serialize(), None);
    }

    #[test]
    fn test_search_path_with_mixed_polarities() {
        let mut selection = TagSelection::parse_query("magic,-romance");
        selection.seed_neutral("isekai");

        assert_eq!(
            selection.search_path("/browse/page-1?"),
            "/browse/page-1?tags=magic,-romance"
        );
    }

    #[test]
    fn test_search_path_without_filter_tags() {
        let mut selection = TagSelection::new();
        selection.seed_neutral("isekai");

        assert_eq!(selection.search_path("/browse/page-1?"), "/browse/page-1?");
    }

    #[test]
    fn test_token_parse_and_encode() {
        let token = TagToken::parse("-slice of life").unwrap();
        assert_eq!(token.name, "slice of life");
        assert_eq!(token.polarity, Polarity::Exclude);
        assert_eq!(token.encoded(), "-slice of life");

        let neutral = TagToken::new("isekai", Polarity::Neutral);
        assert_eq!(neutral.encoded(), "~isekai");
    }

    #[test]
    fn test_candidate_display() {
        let candidate = TagCandidate::new("romance", 412);
        assert_eq!(candidate.to_string(), "romance (412)");
    }

    #[test]
    fn test_candidate_deserializes_from_pair() {
        let candidates: Vec<TagCandidate> =
            serde_json::from_str(r#"[["romance", 412], ["drama", 7]]"#).unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0], TagCandidate::new("romance", 412));
        assert_eq!(candidates[1].count, 7);
    }
}
