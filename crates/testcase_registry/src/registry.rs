use crate::descriptor::TestDescriptor;

/// An append-only, ordered list of test descriptors.
///
/// The process-wide instance is reached through [registry].  Drivers may also build their own, e.g. to run a subset in
/// a particular order, since it's just a list.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    descriptors: Vec<&'static TestDescriptor>,
}

impl Registry {
    pub fn new() -> Registry {
        Default::default()
    }

    /// Append a descriptor.
    ///
    /// Cannot fail.  There is no uniqueness check: registering the same name (or even the same descriptor) twice
    /// yields two entries.
    pub fn register(&mut self, descriptor: &'static TestDescriptor) {
        self.descriptors.push(descriptor);
    }

    /// All descriptors in registration order.
    ///
    /// The iterator is lazy and cloneable, and calling this again yields the same sequence.
    pub fn enumerate(
        &self,
    ) -> impl ExactSizeIterator<Item = &'static TestDescriptor> + Clone + '_ {
        self.descriptors.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Extend<&'static TestDescriptor> for Registry {
    fn extend<I: IntoIterator<Item = &'static TestDescriptor>>(&mut self, iter: I) {
        for d in iter {
            self.register(d);
        }
    }
}

impl FromIterator<&'static TestDescriptor> for Registry {
    fn from_iter<I: IntoIterator<Item = &'static TestDescriptor>>(iter: I) -> Self {
        let mut ret = Registry::new();
        ret.extend(iter);
        ret
    }
}

/// The process-wide registry.
///
/// On the first call, everything submitted by the declaration macros is collected and cached.  Static registration is
/// finished before `main`, so the result never changes afterwards.
pub fn registry() -> &'static Registry {
    lazy_static::lazy_static! {
        static ref REGISTRY: Registry = build_registry();
    }

    &REGISTRY
}

/// Shorthand for `registry().enumerate()`.
pub fn enumerate() -> impl ExactSizeIterator<Item = &'static TestDescriptor> + Clone {
    registry().enumerate()
}

/// Collect statically submitted descriptors into source order.
///
/// Link order of static registrations is up to the linker, so we sort by `(file, line, column)`.  That keeps the
/// declarations of one file in the order they were written; files come in path order.  The sort is stable, so nothing
/// is dropped or merged.
fn build_registry() -> Registry {
    let mut found = inventory::iter::<TestDescriptor>
        .into_iter()
        .collect::<Vec<&'static TestDescriptor>>();
    found.sort_by_key(|d| d.source_order_key());

    log::debug!(
        "Collected {} test cases (registration {})",
        found.len(),
        crate::REGISTRATION
    );

    found.into_iter().collect()
}
