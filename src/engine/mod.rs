mod errors;
mod mapper;
mod parser;
mod persister;
mod trade_processor;
mod validator;

pub use trade_processor::TradeProcessor;
