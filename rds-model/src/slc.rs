/// The slow-labelling-code payload, a tagged union discriminated by the
/// three-bit variant code carried in block C of group 1A.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlcVariant {
    /// Paging and extended country code.
    Paging { paging: u8, country_code: u8 },
    Tmc { identification: u16 },
    PagingId { identification: u16 },
    Language { code: u16 },
    /// Reserved for broadcasters' use.
    ForBroadcasters { data: u16 },
    EwsChannelIdentification { identification: u16 },
    /// Variant code not assigned a meaning by RBDS at decode time.
    Unassigned { code: u8 },
}

/// Slow labelling codes, group 1A.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slc {
    /// Linkage actuator: true if this PI is linked to another service.
    pub la: bool,
    pub variant: SlcVariant,
}

impl Default for Slc {
    fn default() -> Slc {
        Slc {
            la: false,
            variant: SlcVariant::Unassigned { code: 0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unassigned_with_code_zero() {
        assert_eq!(
            Slc::default().variant,
            SlcVariant::Unassigned { code: 0 }
        );
    }
}
