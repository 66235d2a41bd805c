/// Converts a Likert agreement answer into a 1–5 score.
///
/// | Answer            | Score |
/// |-------------------|-------|
/// | Strongly Agree    | 5     |
/// | Agree             | 4     |
/// | Uncertain         | 3     |
/// | Disagree          | 2     |
/// | Strongly Disagree | 1     |
pub fn likert_score(answer: &str) -> Option<u8> {
    match answer {
        "Strongly Agree" => Some(5),
        "Agree" => Some(4),
        "Uncertain" => Some(3),
        "Disagree" => Some(2),
        "Strongly Disagree" => Some(1),
        _ => None,
    }
}

/// Converts an overall-effectiveness answer into a 1–5 score.
///
/// | Answer    | Score |
/// |-----------|-------|
/// | Excellent | 5     |
/// | Very Good | 4     |
/// | Good      | 3     |
/// | Fair      | 2     |
/// | Very Poor | 1     |
pub fn effectiveness_score(answer: &str) -> Option<u8> {
    match answer {
        "Excellent" => Some(5),
        "Very Good" => Some(4),
        "Good" => Some(3),
        "Fair" => Some(2),
        "Very Poor" => Some(1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_likert_boundaries() {
        assert_eq!(likert_score("Strongly Agree"), Some(5));
        assert_eq!(likert_score("Agree"), Some(4));
        assert_eq!(likert_score("Uncertain"), Some(3));
        assert_eq!(likert_score("Disagree"), Some(2));
        assert_eq!(likert_score("Strongly Disagree"), Some(1));
    }

    #[test]
    fn test_effectiveness_boundaries() {
        assert_eq!(effectiveness_score("Excellent"), Some(5));
        assert_eq!(effectiveness_score("Very Good"), Some(4));
        assert_eq!(effectiveness_score("Good"), Some(3));
        assert_eq!(effectiveness_score("Fair"), Some(2));
        assert_eq!(effectiveness_score("Very Poor"), Some(1));
    }

    #[test]
    fn test_scales_do_not_cross() {
        assert_eq!(likert_score("Excellent"), None);
        assert_eq!(effectiveness_score("Agree"), None);
    }

    #[test]
    fn test_unmapped_answers() {
        assert_eq!(likert_score(""), None);
        assert_eq!(likert_score("N/A"), None);
        assert_eq!(likert_score("strongly agree"), None);
        assert_eq!(effectiveness_score("Poor"), None);
    }
}
