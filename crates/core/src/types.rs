/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Money values. Backed by `NUMERIC(10, 2)` columns so arithmetic stays
/// exact; never use floats for amounts.
pub type Money = rust_decimal::Decimal;
