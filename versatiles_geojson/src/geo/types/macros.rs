/// Implements `From` for a newtype over `Vec<$item>` from vectors, slices and array literals,
/// so test fixtures like `LineStringGeometry::from(&[[0, 0], [1, 1]])` stay short.
#[macro_export]
macro_rules! impl_from_array {
	($($outer:ty => $item:ty),* $(,)?) => {$(
		impl<T> From<Vec<T>> for $outer
		where
			$item: From<T>,
		{
			fn from(value: Vec<T>) -> Self {
				Self(value.into_iter().map(<$item>::from).collect())
			}
		}

		impl<'a, T> From<&'a Vec<T>> for $outer
		where
			$item: From<&'a T>,
		{
			fn from(value: &'a Vec<T>) -> Self {
				Self(value.iter().map(<$item>::from).collect())
			}
		}

		impl<'a, T> From<&'a [T]> for $outer
		where
			$item: From<&'a T>,
		{
			fn from(value: &'a [T]) -> Self {
				Self(value.iter().map(<$item>::from).collect())
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $outer
		where
			$item: From<&'a T>,
		{
			fn from(value: &'a [T; N]) -> Self {
				Self(value.iter().map(<$item>::from).collect())
			}
		}
	)*};
}
