/// Shared read access, range construction and `Debug` for composite types.
///
/// The composite must be a tuple struct around `Vec<$element>` implementing `CompositeGeometry`.
macro_rules! impl_composite {
	($t:ty, $element:ty) => {
		impl $t {
			/// Builds the composite from `elements[begin..end]`.
			///
			/// # Errors
			/// Fails with [`GeometryError::RangeInvalid`](crate::GeometryError::RangeInvalid) if the
			/// range does not fit `elements`, or if the selected elements violate an invariant.
			pub fn from_slice_range(
				elements: &[$element],
				begin: usize,
				end: usize,
			) -> Result<Self, $crate::GeometryError> {
				if begin > end || end > elements.len() {
					return Err($crate::GeometryError::RangeInvalid {
						begin,
						end,
						len: elements.len(),
					});
				}
				<Self as $crate::types::CompositeGeometry>::from_elements(elements[begin..end].to_vec())
			}

			#[must_use]
			pub fn elements(&self) -> &[$element] {
				&self.0
			}

			#[must_use]
			pub fn len(&self) -> usize {
				self.0.len()
			}

			#[must_use]
			pub fn is_empty(&self) -> bool {
				self.0.is_empty()
			}

			pub fn iter(&self) -> std::slice::Iter<'_, $element> {
				self.0.iter()
			}

			#[must_use]
			pub fn first(&self) -> Option<&$element> {
				self.0.first()
			}

			#[must_use]
			pub fn last(&self) -> Option<&$element> {
				self.0.last()
			}

			#[must_use]
			pub fn into_inner(self) -> Vec<$element> {
				self.0
			}
		}

		impl<'a> IntoIterator for &'a $t {
			type Item = &'a $element;
			type IntoIter = std::slice::Iter<'a, $element>;

			fn into_iter(self) -> Self::IntoIter {
				self.0.iter()
			}
		}

		impl std::fmt::Debug for $t {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.debug_list().entries(&self.0).finish()
			}
		}
	};
}

/// `From` conversions out of nested vectors, slices and arrays for infallible composites.
macro_rules! impl_from_array {
	($($t:ty, $i:ty),*) => {$(
		impl<T> From<Vec<T>> for $t
		where
			$i: From<T>,
		{
			fn from(value: Vec<T>) -> Self {
				Self::new(value.into_iter().map(<$i>::from).collect())
			}
		}

		impl<'a, T> From<&'a [T]> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a [T]) -> Self {
				Self::new(value.iter().map(<$i>::from).collect())
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a [T; N]) -> Self {
				Self::new(value.iter().map(<$i>::from).collect())
			}
		}
	)*};
}

/// Like `impl_from_array!`, for composites whose construction can fail.
/// A ring failure inside the n-th element is reported with `polygon: Some(n)`.
macro_rules! impl_try_from_array {
	($($t:ty, $i:ty),*) => {$(
		impl<T> TryFrom<Vec<T>> for $t
		where
			$i: TryFrom<T>,
			$crate::GeometryError: From<<$i as TryFrom<T>>::Error>,
		{
			type Error = $crate::GeometryError;

			fn try_from(value: Vec<T>) -> Result<Self, Self::Error> {
				let elements = value
					.into_iter()
					.enumerate()
					.map(|(index, item)| {
						<$i>::try_from(item).map_err(|err| $crate::GeometryError::from(err).in_polygon(index))
					})
					.collect::<Result<Vec<_>, _>>()?;
				<Self as $crate::types::CompositeGeometry>::from_elements(elements)
			}
		}

		impl<'a, T, const N: usize> TryFrom<&'a [T; N]> for $t
		where
			$i: TryFrom<&'a T>,
			$crate::GeometryError: From<<$i as TryFrom<&'a T>>::Error>,
		{
			type Error = $crate::GeometryError;

			fn try_from(value: &'a [T; N]) -> Result<Self, Self::Error> {
				let elements = value
					.iter()
					.enumerate()
					.map(|(index, item)| {
						<$i>::try_from(item).map_err(|err| $crate::GeometryError::from(err).in_polygon(index))
					})
					.collect::<Result<Vec<_>, _>>()?;
				<Self as $crate::types::CompositeGeometry>::from_elements(elements)
			}
		}
	)*};
}

pub(crate) use impl_composite;
pub(crate) use impl_from_array;
pub(crate) use impl_try_from_array;
