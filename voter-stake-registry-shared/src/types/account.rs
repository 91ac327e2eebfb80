use borsh::BorshDeserialize;
use sha2::{Digest, Sha256};

use crate::ConversionError;

/// Length of the Anchor account discriminator prefix.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Computes the Anchor account discriminator: `sha256("account:{name}")[..8]`.
pub fn account_discriminator(name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let hash = Sha256::digest(format!("account:{name}").as_bytes());
    let mut discriminator = [0u8; DISCRIMINATOR_LEN];
    discriminator.copy_from_slice(&hash[..DISCRIMINATOR_LEN]);
    discriminator
}

/// An account whose data is an Anchor discriminator followed by a borsh body.
pub trait AnchorAccount: BorshDeserialize {
    /// Account type name as declared in the program.
    const ACCOUNT_NAME: &'static str;

    /// Decodes raw account data, checking the discriminator first.
    ///
    /// Trailing bytes after the body are ignored, since accounts are often
    /// allocated with spare room.
    fn try_from_account_data(data: &[u8]) -> Result<Self, ConversionError> {
        if data.len() < DISCRIMINATOR_LEN
            || data[..DISCRIMINATOR_LEN] != account_discriminator(Self::ACCOUNT_NAME)
        {
            return Err(ConversionError::DiscriminatorMismatch(Self::ACCOUNT_NAME));
        }
        let mut body = &data[DISCRIMINATOR_LEN..];
        Self::deserialize(&mut body).map_err(|e| ConversionError::Decode(e.to_string()))
    }
}
