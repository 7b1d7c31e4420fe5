use super::{CrsTag, Envelope, GeoFeature};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
	pub bbox: Option<Envelope>,
	pub crs: Option<CrsTag>,
}

impl GeoCollection {
	pub fn from(features: Vec<GeoFeature>) -> Self {
		Self {
			features,
			..Default::default()
		}
	}

	/// Union of the envelopes of all features.
	pub fn envelope(&self) -> Envelope {
		self.features.iter().fold(Envelope::Empty, |mut envelope, feature| {
			envelope.merge(&feature.envelope());
			envelope
		})
	}
}
