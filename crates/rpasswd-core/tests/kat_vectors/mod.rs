mod argon2id;
mod bcrypt;
mod pbkdf2;
mod scrypt;
