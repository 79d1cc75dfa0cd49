mod drops;

pub use drops::DropsNewtype;

pub const DROPS_PER_XRP: u128 = 1_000_000;
