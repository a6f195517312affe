use ahash::HashMap;

/// Id of a name interned in [`Svot`](crate::Svot).
///
/// Element and attribute names are stored once and referred to by id
/// everywhere else. Create one with [`Svot::add_name`](crate::Svot::add_name)
/// or look an existing one up with [`Svot::name`](crate::Svot::name).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct NameId(u32);

pub(crate) struct NameLookup {
    by_id: Vec<String>,
    by_name: HashMap<String, NameId>,
}

impl NameLookup {
    pub(crate) fn new() -> Self {
        NameLookup {
            by_id: Vec::new(),
            by_name: HashMap::default(),
        }
    }

    pub(crate) fn get_id(&self, name: &str) -> Option<NameId> {
        self.by_name.get(name).copied()
    }

    pub(crate) fn get_id_mut(&mut self, name: &str) -> NameId {
        if let Some(id) = self.by_name.get(name) {
            return *id;
        }
        let id = NameId(self.by_id.len() as u32);
        self.by_name.insert(name.to_string(), id);
        self.by_id.push(name.to_string());
        id
    }

    #[inline]
    pub(crate) fn get_value(&self, id: NameId) -> &str {
        &self.by_id[id.0 as usize]
    }
}
