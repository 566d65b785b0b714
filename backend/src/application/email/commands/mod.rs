pub mod send_invitation;
pub mod test_smtp;
