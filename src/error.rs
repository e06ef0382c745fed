/// Error type for geohash-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GeohashError {
    /// The geohash string has no symbols.
    EmptyInput,
    /// The geohash contains a symbol outside the base-32 alphabet.
    InvalidCharacters(char),
    /// A latitude, longitude, precision or extent is outside its valid range.
    InvalidCoordinates(String),
}

impl std::fmt::Display for GeohashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeohashError::EmptyInput => write!(f, "Empty geohash"),
            GeohashError::InvalidCharacters(c) => {
                write!(f, "Invalid geohash character: {:?}", c)
            }
            GeohashError::InvalidCoordinates(msg) => write!(f, "Invalid coordinates: {}", msg),
        }
    }
}

impl std::error::Error for GeohashError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(GeohashError::EmptyInput.to_string(), "Empty geohash");
        assert_eq!(
            GeohashError::InvalidCharacters('a').to_string(),
            "Invalid geohash character: 'a'"
        );
        assert_eq!(
            GeohashError::InvalidCoordinates("latitude 576.49 is outside [-90, 90]".into())
                .to_string(),
            "Invalid coordinates: latitude 576.49 is outside [-90, 90]"
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(GeohashError::EmptyInput);
        assert!(err.source().is_none());
    }
}
