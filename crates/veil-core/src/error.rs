use thiserror::Error;

pub use veil_crypto::EnvelopeError;

#[derive(Error, Debug)]
pub enum VeilError {
    /// Represents an unsupported carrier media. For example, a Movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier audio media. For example, a broken WAV file
    #[error("Audio media is invalid")]
    InvalidAudioMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a requested output format that would destroy the hidden bits, like JPEG
    #[error("Image output format {0} is not lossless")]
    UnsupportedOutputFormat(String),

    /// Represents a payload that does not fit into the carrier, nothing was written
    #[error("Capacity Error: the payload needs {needed_bits} bits, but the carrier offers only {capacity_bits} bits")]
    PayloadTooLarge {
        needed_bits: usize,
        capacity_bits: usize,
    },

    /// Represents a plaintext message that starts with a frame magic tag and could not be told apart on decode
    #[error("A plain text message must not start with a frame magic tag")]
    ReservedMagicPrefix,

    /// Represents a nested image header with a missing magic tag or impossible dimensions
    #[error("No hidden image found, the image header is missing or malformed")]
    MalformedNestedImage,

    /// Represents a nested image body that ended before all pixels were read
    #[error("Incomplete hidden image: expected {expected} bytes, but only {received} were found")]
    IncompleteNestedImage { expected: usize, received: usize },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure when encoding an audio file.
    #[error("Audio encoding error")]
    AudioEncodingError,

    /// Represents an error when encrypting the data
    #[error("Encryption error")]
    EncryptionError(EnvelopeError),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message or secret image")]
    MissingMessage,

    #[error("API Error: Either a message or a secret image can be hidden, not both")]
    ConflictingPayloads,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
