// Label classification over dense document vectors.
//
// The fitting algorithm sits behind the LinearClassifier trait. The adapter
// (LabelClassifier) only owns the label <-> index bijection and the
// fit/predict call contract.

pub mod adapter;
pub mod encoder;
pub mod softmax;
pub mod traits;

pub use adapter::LabelClassifier;
pub use encoder::LabelEncoder;
pub use softmax::{SoftmaxModel, SoftmaxRegression};
pub use traits::LinearClassifier;
