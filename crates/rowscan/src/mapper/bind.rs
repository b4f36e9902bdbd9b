use rowscan_core::{FieldMut, FieldPath, RawBytes, Record, ScanTarget};

/// The target bound to one column of a row.
pub(super) enum Binding<'a> {
    /// The column scans into a field of the destination
    Field(&'a mut dyn ScanTarget),

    /// The column has no field and is dropped
    Discard(RawBytes),
}

/// Writable handles to the fields of a destination, addressed by field path.
enum Slot<'a> {
    /// `None` once a column has claimed the field
    Value(Option<&'a mut dyn ScanTarget>),
    Embedded(Vec<Slot<'a>>),
    Opaque,
}

/// Binds one target per column, in column order.
///
/// When several columns resolve to the same field, the last of them is bound
/// to the field and the others are discarded, so the field ends up holding
/// the value that sequential scanning would have left in it.
pub(super) fn bind<'a, T: Record>(dest: &'a mut T, paths: &[Option<&FieldPath>]) -> Vec<Binding<'a>> {
    let record = std::any::type_name::<T>();
    let mut slots = Slot::expand(dest.fields_mut());
    let mut bindings = Vec::with_capacity(paths.len());

    for path in paths.iter().rev() {
        let target = path.and_then(|path| Slot::take(&mut slots, path.as_slice(), record, path));

        bindings.push(match target {
            Some(target) => Binding::Field(target),
            None => Binding::Discard(RawBytes),
        });
    }

    bindings.reverse();
    bindings
}

impl<'a> Binding<'a> {
    /// Borrows every binding as a scan target, keeping column order.
    pub(super) fn targets<'b>(bindings: &'b mut [Binding<'a>]) -> Vec<&'b mut dyn ScanTarget> {
        bindings.iter_mut().map(Binding::target).collect()
    }

    fn target(&mut self) -> &mut dyn ScanTarget {
        match self {
            Binding::Field(target) => &mut **target,
            Binding::Discard(discard) => discard,
        }
    }
}

impl<'a> Slot<'a> {
    fn expand(fields: Vec<FieldMut<'a>>) -> Vec<Slot<'a>> {
        fields
            .into_iter()
            .map(|field| match field {
                FieldMut::Value(target) => Slot::Value(Some(target)),
                FieldMut::Embedded(record) => Slot::Embedded(Slot::expand(record.fields_mut())),
                FieldMut::Opaque => Slot::Opaque,
            })
            .collect()
    }

    /// Follows `steps` and takes the field at the end. Returns `None` if an
    /// earlier column already took it.
    ///
    /// # Panics
    ///
    /// Panics if the path does not lead to a value field. Field maps are built
    /// from `Record::record_type`, so this means the record's `fields_mut`
    /// disagrees with its descriptor.
    fn take(
        slots: &mut [Slot<'a>],
        steps: &[usize],
        record: &str,
        path: &FieldPath,
    ) -> Option<&'a mut dyn ScanTarget> {
        let Some((&index, rest)) = steps.split_first() else {
            panic!("empty field path for record `{record}`");
        };

        match slots.get_mut(index) {
            Some(Slot::Value(target)) if rest.is_empty() => target.take(),
            Some(Slot::Embedded(fields)) if !rest.is_empty() => {
                Slot::take(fields, rest, record, path)
            }
            _ => panic!(
                "record `{record}` has no scannable field at path {:?}; \
                 `fields_mut` does not match `record_type`",
                path.as_slice()
            ),
        }
    }
}
