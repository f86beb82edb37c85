//! Sub-fields of the command-type byte

label_table! {
    /// Message direction (bit 7)
    pub enum CommandType: "command type" {
        Request = 0 => "REQUEST",
        Ack = 1 => "ACK",
    }
}

label_table! {
    /// Acknowledgement kind (bits 5-6)
    pub enum AckType: "ack type" {
        NoAck = 0 => "NO_ACK",
        /// Acknowledge before executing
        Push = 1 => "PUSH",
        Ack = 2 => "ACK",
        Response = 3 => "RESPONSE",
    }
}

label_table! {
    /// Encryption kind (bits 0-3); descriptive only
    pub enum EncryptionType: "encryption type" {
        None = 0 => "NONE",
        Aes128 = 1 => "AES_128",
        SelfDef = 2 => "SELF_DEF",
        Xor = 3 => "XOR",
        Des56 = 4 => "DES_56",
        Des112 = 5 => "DES_112",
        Aes192 = 6 => "AES_192",
        Aes256 = 7 => "AES_256",
    }
}
