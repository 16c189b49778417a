pub mod price_ticker;
pub mod result_view;
