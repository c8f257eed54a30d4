// Credential handling
// Password hashing only: no session or token is issued

pub mod password;
