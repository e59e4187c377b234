use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of generated note ids, matching the client-visible format.
pub const ID_LENGTH: usize = 16;

/// Generate a random note id.
///
/// 16 alphanumeric characters; uniqueness is probabilistic and the store
/// regenerates on collision before appending.
pub fn note_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_id_has_fixed_length() {
        assert_eq!(note_id().len(), ID_LENGTH);
    }

    #[test]
    fn test_note_id_is_alphanumeric() {
        assert!(note_id().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_note_ids_are_distinct() {
        let ids: std::collections::HashSet<String> = (0..100).map(|_| note_id()).collect();
        assert_eq!(ids.len(), 100);
    }
}
