pub mod graphic_pack;
pub mod title;

pub use graphic_pack::GraphicPack;
pub use title::Title;
