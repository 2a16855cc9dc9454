/// Which photo (if any) the lightbox is showing, out of a gallery of fixed length.
///
/// The selection is always either `None` or a valid index into the gallery, and moving through it
/// wraps around in both directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GallerySelection {
	selected: Option<usize>,
	len: usize
}

impl GallerySelection {
	#[must_use]
	pub fn new(len: usize) -> Self {
		Self { selected: None, len }
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.len
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	#[must_use]
	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.selected.is_some()
	}

	/// Shows the photo at `idx`. An index past the end of the gallery is ignored rather than
	/// stored, so the selection can never point outside of it.
	pub fn open(&mut self, idx: usize) {
		if idx < self.len {
			self.selected = Some(idx);
		}
	}

	pub fn close(&mut self) {
		self.selected = None;
	}

	pub fn next(&mut self) {
		// len can't be 0 here since `open` wouldn't have accepted anything
		if let Some(idx) = self.selected {
			self.selected = Some((idx + 1) % self.len);
		}
	}

	pub fn previous(&mut self) {
		if let Some(idx) = self.selected {
			self.selected = Some((idx + self.len - 1) % self.len);
		}
	}

	/// e.g. `3 / 6`, for the counter under the open photo
	#[must_use]
	pub fn caption(&self) -> Option<String> {
		self.selected.map(|idx| format!("{} / {}", idx + 1, self.len))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn opened_at(len: usize, idx: usize) -> GallerySelection {
		let mut sel = GallerySelection::new(len);
		sel.open(idx);
		sel
	}

	#[test]
	fn next_n_times_comes_back_around() {
		for len in 1..=8 {
			for start in 0..len {
				let mut sel = opened_at(len, start);
				for _ in 0..len {
					sel.next();
					assert!(sel.selected().is_some_and(|i| i < len));
				}
				assert_eq!(sel.selected(), Some(start), "len {len}, start {start}");
			}
		}
	}

	#[test]
	fn previous_undoes_next() {
		for len in 1..=8 {
			for start in 0..len {
				let mut sel = opened_at(len, start);
				sel.next();
				sel.previous();
				assert_eq!(sel.selected(), Some(start));

				sel.previous();
				sel.next();
				assert_eq!(sel.selected(), Some(start));
			}
		}
	}

	#[test]
	fn closed_selection_ignores_navigation() {
		let mut sel = opened_at(6, 2);
		sel.close();
		assert!(!sel.is_open());

		sel.next();
		assert_eq!(sel.selected(), None);
		sel.previous();
		assert_eq!(sel.selected(), None);
		assert_eq!(sel.caption(), None);
	}

	#[test]
	fn six_photo_walkthrough() {
		let mut sel = opened_at(6, 0);
		sel.next();
		assert_eq!(sel.selected(), Some(1));

		for _ in 0..6 {
			sel.next();
		}
		assert_eq!(sel.selected(), Some(1));

		sel.open(0);
		sel.previous();
		assert_eq!(sel.selected(), Some(5));
		assert_eq!(sel.caption().as_deref(), Some("6 / 6"));
	}

	#[test]
	fn out_of_range_open_keeps_old_selection() {
		let mut sel = opened_at(3, 1);
		sel.open(3);
		assert_eq!(sel.selected(), Some(1));

		let mut empty = GallerySelection::new(0);
		assert!(empty.is_empty());
		empty.open(0);
		empty.next();
		empty.previous();
		assert_eq!(empty.selected(), None);
	}
}
