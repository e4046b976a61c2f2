use crate::group::GroupType;

pub const ODA_MAX_APPLICATIONS: usize = 10;

/// One Open Data Application binding: an application ID routed to a group
/// type slot by a group 3A announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OdaEntry {
    pub id: u16,
    pub group_type: GroupType,
    pub packet_count: u32,
}

/// The set of currently announced ODA bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OdaTable {
    pub entries: Vec<OdaEntry>,
}

impl OdaTable {
    pub fn find_by_group_type(&self, gt: GroupType) -> Option<usize> {
        self.entries.iter().position(|e| e.group_type == gt)
    }

    pub fn find_by_id(&self, id: u16) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Registers or updates a binding, silently refusing once the 10-entry
    /// cap is reached.
    pub fn announce(&mut self, id: u16, gt: GroupType) -> bool {
        if let Some(idx) = self.find_by_id(id) {
            self.entries[idx].group_type = gt;
            return true;
        }
        if self.entries.len() >= ODA_MAX_APPLICATIONS {
            return false;
        }
        self.entries.push(OdaEntry {
            id,
            group_type: gt,
            packet_count: 0,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::GroupVersion;

    #[test]
    fn announce_adds_new_binding() {
        let mut table = OdaTable::default();
        let gt = GroupType::new(3, GroupVersion::B);
        assert!(table.announce(0x4BD7, gt));
        assert_eq!(table.find_by_id(0x4BD7), Some(0));
        assert_eq!(table.find_by_group_type(gt), Some(0));
    }

    #[test]
    fn announce_updates_existing_binding_by_id() {
        let mut table = OdaTable::default();
        let first = GroupType::new(3, GroupVersion::B);
        let second = GroupType::new(5, GroupVersion::A);
        table.announce(0xCD46, first);
        table.announce(0xCD46, second);
        assert_eq!(table.entries.len(), 1);
        assert_eq!(table.entries[0].group_type, second);
    }

    #[test]
    fn announce_refuses_past_application_cap() {
        let mut table = OdaTable::default();
        for id in 0..ODA_MAX_APPLICATIONS as u16 {
            assert!(table.announce(id, GroupType::new(5, GroupVersion::A)));
        }
        assert!(!table.announce(0xFFFF, GroupType::new(5, GroupVersion::A)));
    }
}
