//! Neighborhood selection set

/// Ordered set of selected neighborhood values.
///
/// Order is selection order, which is also the order the values appear in
/// the submitted payload. Values are never duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborhoodSelection {
    values: Vec<String>,
}

impl NeighborhoodSelection {
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Selected values in selection order
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for NeighborhoodSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut values: Vec<String> = Vec::new();
        for value in iter {
            let value = value.into();
            if !values.contains(&value) {
                values.push(value);
            }
        }
        Self { values }
    }
}

/// Compute the selection that results from toggling `value`.
///
/// Removes `value` if present, otherwise appends it. The input is left
/// untouched so earlier snapshots of the selection stay valid.
pub fn toggle(current: &NeighborhoodSelection, value: &str) -> NeighborhoodSelection {
    let values = if current.contains(value) {
        current
            .values
            .iter()
            .filter(|v| v.as_str() != value)
            .cloned()
            .collect()
    } else {
        let mut values = current.values.clone();
        values.push(value.to_string());
        values
    };
    NeighborhoodSelection { values }
}
