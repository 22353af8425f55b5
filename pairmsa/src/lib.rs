#[cfg(feature = "core")]
#[doc(inline)]
pub use pairmsa_core as core;

#[cfg(feature = "a3m")]
#[doc(inline)]
pub use pairmsa_a3m as a3m;

#[cfg(feature = "uniprot")]
#[doc(inline)]
pub use pairmsa_uniprot as uniprot;

#[cfg(feature = "stitch")]
#[doc(inline)]
pub use pairmsa_stitch as stitch;
