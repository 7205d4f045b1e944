mod price;

pub use price::Price;
