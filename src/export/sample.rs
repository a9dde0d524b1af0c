use crate::models::Transaction;
use crate::types::Channel;

/// Example input offered to users who need a template for their own upload.
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        sample("CUST001", "TXN001", 1500.0, 1, 365, Channel::Online, "2024-01-15 14:30:00"),
        sample("CUST002", "TXN002", 25000.0, 0, 15, Channel::Atm, "2024-01-15 23:45:00"),
        sample("CUST003", "TXN003", 500.0, 1, 730, Channel::Pos, "2024-01-16 10:15:00"),
        sample("CUST001", "TXN004", 125000.0, 0, 5, Channel::Online, "2024-01-16 02:30:00")
    ]
}

fn sample(
    customer_id: &str,
    transaction_id: &str,
    transaction_amount: f64,
    kyc_verified: u8,
    account_age_days: u32,
    channel: Channel,
    transaction_datetime: &str
) -> Transaction {
    Transaction {
        customer_id: customer_id.to_string(),
        transaction_id: transaction_id.to_string(),
        transaction_amount,
        kyc_verified,
        account_age_days,
        channel,
        transaction_datetime: transaction_datetime.to_string()
    }
}
