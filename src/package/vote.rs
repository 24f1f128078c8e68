//! Majority vote over declared identifiers.

/// Vote counts in first-seen order.
#[derive(Debug, Default, Clone)]
pub struct Tally {
    counts: Vec<(String, usize)>,
}

impl Tally {
    pub fn add(&mut self, id: impl Into<String>) {
        let id = id.into();
        match self.counts.iter_mut().find(|(seen, _)| *seen == id) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((id, 1)),
        }
    }

    /// The identifier with the most votes. Ties go to the identifier that
    /// was seen first.
    pub fn winner(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.counts {
            if best.is_none_or(|b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(id, _)| id.as_str())
    }
}
