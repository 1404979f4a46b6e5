pub mod number_question;
