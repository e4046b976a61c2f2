//! Slow labelling code decoding, group 1A.

use rds_model::{Slc, SlcVariant};

/// Decodes a slow-labelling-codes group from an already block-C-accepted
/// value.
pub fn decode(c: u16) -> Slc {
    let la = (c & 0x8000) != 0;
    let variant_code = ((c >> 12) & 0x7) as u8;
    let payload = c & 0x0FFF;

    let variant = match variant_code {
        0 => SlcVariant::Paging {
            paging: ((payload >> 8) & 0xF) as u8,
            country_code: (payload & 0xFF) as u8,
        },
        1 => SlcVariant::Tmc {
            identification: payload,
        },
        2 => SlcVariant::PagingId {
            identification: payload,
        },
        3 => SlcVariant::Language { code: payload },
        6 => SlcVariant::ForBroadcasters { data: payload },
        7 => SlcVariant::EwsChannelIdentification {
            identification: payload,
        },
        other => SlcVariant::Unassigned { code: other },
    };

    Slc { la, variant }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_paging_variant_with_country_code() {
        // variant 0, la set, paging=3, country_code=0xAB.
        let c = 0x8000 | (0 << 12) | (3 << 8) | 0xAB;
        let slc = decode(c);
        assert!(slc.la);
        assert_eq!(
            slc.variant,
            SlcVariant::Paging {
                paging: 3,
                country_code: 0xAB,
            }
        );
    }

    #[test]
    fn decodes_language_variant() {
        let c = (3 << 12) | 0x042;
        let slc = decode(c);
        assert!(!slc.la);
        assert_eq!(slc.variant, SlcVariant::Language { code: 0x042 });
    }

    #[test]
    fn unrecognized_variant_code_is_preserved() {
        let c = 4 << 12;
        let slc = decode(c);
        assert_eq!(slc.variant, SlcVariant::Unassigned { code: 4 });
    }
}
