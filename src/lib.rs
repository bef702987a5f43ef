pub mod encode;
pub mod error;
pub mod mwu;
pub mod normal;
pub mod rank;
pub mod ties;
pub mod utils;
pub mod value_type;
pub mod wmw;

pub use encode::{EncodeIndex, IndexSets};
pub use error::{Result, WmwError};
pub use mwu::RankSumEvaluator;
pub use rank::RankList;
pub use value_type::ValueType;
pub use wmw::{wmw_test, WmwTest};
