use crate::types::{SessionId, KEY_LEN, SWARM_SPACE_LEN};

/// XOR of the four big-endian 64-bit words of `id`.
#[must_use]
pub fn swarm_space_u64(id: &[u8; KEY_LEN]) -> u64 {
    id.chunks_exact(SWARM_SPACE_LEN).fold(0u64, |acc, word| {
        let mut be = [0u8; SWARM_SPACE_LEN];
        be.copy_from_slice(word);
        acc ^ u64::from_be_bytes(be)
    })
}

/// Swarm-space placement value of `id`, big-endian.
#[must_use]
pub fn swarm_space(id: &[u8; KEY_LEN]) -> [u8; SWARM_SPACE_LEN] {
    swarm_space_u64(id).to_be_bytes()
}

impl SessionId {
    #[must_use]
    pub fn swarm_space(&self) -> u64 {
        swarm_space_u64(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn zero_and_repeated_words_cancel() {
        assert_eq!(swarm_space_u64(&[0u8; 32]), 0);
        // four identical words XOR to zero
        assert_eq!(swarm_space_u64(&[0xa5; 32]), 0);
    }

    #[test]
    fn single_word_passes_through_big_endian() {
        let mut id = [0u8; 32];
        id[16..24].copy_from_slice(&hex!("0102030405060708"));
        assert_eq!(swarm_space(&id), hex!("0102030405060708"));
        assert_eq!(swarm_space_u64(&id), 0x0102_0304_0506_0708);
    }

    #[test]
    fn word_order_does_not_matter() {
        let id = hex!("fc331b505085fecc2188707c1da8002ee3edc6eb5591e36ded40a4669a94ab11");
        let mut rotated = [0u8; 32];
        rotated[..8].copy_from_slice(&id[24..]);
        rotated[8..].copy_from_slice(&id[..24]);
        assert_eq!(swarm_space(&id), swarm_space(&rotated));
        assert_eq!(SessionId(id).swarm_space(), swarm_space_u64(&id));
    }
}
