//! Opcodes of the general command set

label_table! {
    /// Opcodes valid when the command set is `GENERAL`
    pub enum GeneralCommand: "general command" {
        Ping = 0x00 => "PING",
        VersionRequest = 0x01 => "VERSION_REQUEST",
        PushParamSet = 0x02 => "PUSH_PARAM_SET",
        PushParamGet = 0x03 => "PUSH_PARAM_GET",
        PushParamStart = 0x04 => "PUSH_PARAM_START",
        MultiParamSet = 0x05 => "MULTI_PARAM_SET",
        MultiParamGet = 0x06 => "MULTI_PARAM_GET",
        EnterLoader = 0x07 => "ENTER_LOADER",
        UpdateConfirm = 0x08 => "UPDATE_CONFIRM",
        UpdateTransmit = 0x09 => "UPDATE_TRANSMIT",
        UpdateFinish = 0x0A => "UPDATE_FINISH",
        RebootChip = 0x0B => "REBOOT_CHIP",
        GetDeviceState = 0x0C => "GET_DEVICE_STATE",
        GetDeviceVersion = 0x0D => "GET_DEVICE_VERSION",
        Heartbeat = 0x0E => "HEARTBEAT",
        UpdateSelfRequest = 0x0F => "UPDATE_SELF_REQUEST",
        SetSdkMsgFrequency = 0x10 => "SET_SDK_MSG_FREQUENCY",
        FileList = 0x20 => "FILE_LIST",
        FileInfo = 0x21 => "FILE_INFO",
        FileSend = 0x22 => "FILE_SEND",
        FileReceive = 0x23 => "FILE_RECEIVE",
        FileSending = 0x24 => "FILE_SENDING",
        FileSegmentError = 0x25 => "FILE_SEGMENT_ERROR",
        FileTransAppToCamera = 0x26 => "FILE_TRANS_APP_TO_CAMERA",
        FileTransCameraToApp = 0x27 => "FILE_TRANS_CAMERA_TO_APP",
        FileTransDelete = 0x28 => "FILE_TRANS_DELETE",
        EncryptConfig = 0x30 => "ENCRYPT_CONFIG",
        ActivateConfig = 0x32 => "ACTIVATE_CONFIG",
        MfiCert = 0x33 => "MFI_CERT",
        SafeCommunication = 0x34 => "SAFE_COMMUNICATION",
        FwUpdateDescPush = 0x40 => "FW_UPDATE_DESC_PUSH",
        FwUpdatePushControl = 0x41 => "FW_UPDATE_PUSH_CONTROL",
        FwUpgradePushStatus = 0x42 => "FW_UPGRADE_PUSH_STATUS",
        SleepControl = 0x45 => "SLEEP_CONTROL",
        ShutdownNotification = 0x46 => "SHUTDOWN_NOTIFICATION",
        PowerState = 0x47 => "POWER_STATE",
        LedControl = 0x48 => "LED_CONTROL",
        SetDateTime = 0x4A => "SET_DATE_TIME",
        GetDateTime = 0x4B => "GET_DATE_TIME",
        GetModuleSysStatus = 0x4C => "GET_MODULE_SYS_STATUS",
        SetRt = 0x4D => "SET_RT",
        GetRt = 0x4E => "GET_RT",
        GetCfgFile = 0x4F => "GET_CFG_FILE",
        SetSerialNumber = 0x50 => "SET_SERIAL_NUMBER",
        GetSerialNumber = 0x51 => "GET_SERIAL_NUMBER",
        SetGpsPushConfig = 0x52 => "SET_GPS_PUSH_CONFIG",
        PushGpsInfo = 0x53 => "PUSH_GPS_INFO",
        GetTemperatureInfo = 0x54 => "GET_TEMPERATURE_INFO",
        GetAliveTime = 0x55 => "GET_ALIVE_TIME",
        OverTemperature = 0x56 => "OVER_TEMPERATURE",
        SendNetworkInfo = 0x57 => "SEND_NETWORK_INFO",
        TimeSync = 0x58 => "TIME_SYNC",
        TestMode = 0x59 => "TEST_MODE",
        PlaySound = 0x5A => "PLAY_SOUND",
        StartFtp = 0x5B => "START_FTP",
        UavFluInfo = 0x5C => "UAV_FLU_INFO",
        AutoTestInfo = 0x60 => "AUTO_TEST_INFO",
        SetProductNewestVersion = 0x61 => "SET_PRODUCT_NEWEST_VERSION",
        GetProductNewestVersion = 0x62 => "GET_PRODUCT_NEWEST_VERSION",
        SendReservedKey = 0xEF => "SEND_RESERVED_KEY",
        LogPush = 0xF0 => "LOG_PUSH",
        ComponentSelfTestState = 0xF1 => "COMPONENT_SELF_TEST_STATE",
        LogControlGlobal = 0xF2 => "LOG_CONTROL_GLOBAL",
        LogControlModule = 0xF3 => "LOG_CONTROL_MODULE",
        TestStart = 0xF4 => "TEST_START",
        TestStop = 0xF5 => "TEST_STOP",
        TestQueryResult = 0xF6 => "TEST_QUERY_RESULT",
        PushTestResult = 0xF7 => "PUSH_TEST_RESULT",
        GetMetadata = 0xF8 => "GET_METADATA",
        LogControl = 0xFA => "LOG_CONTROL",
        SelfTestState = 0xFB => "SELF_TEST_STATE",
        SelfTestStateCount = 0xFC => "SELF_TEST_STATE_COUNT",
        DumpFrameBuffer = 0xFD => "DUMP_FRAME_BUFFER",
        SelfDefine = 0xFE => "SELF_DEFINE",
        QueryDeviceInfo = 0xFF => "QUERY_DEVICE_INFO",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_opcodes() {
        assert_eq!(GeneralCommand::try_from(0x5B).unwrap(), GeneralCommand::StartFtp);
        assert_eq!(GeneralCommand::StartFtp.name(), "START_FTP");
        assert_eq!(GeneralCommand::label(0x4F), Some("GET_CFG_FILE"));
        assert_eq!(GeneralCommand::label(0x0E), Some("HEARTBEAT"));
    }

    #[test]
    fn test_gaps_are_unknown() {
        assert_eq!(GeneralCommand::label(0x11), None);
        assert_eq!(GeneralCommand::label(0x31), None);
    }

    #[test]
    fn test_table_round_trips() {
        for &command in GeneralCommand::ALL {
            assert_eq!(GeneralCommand::try_from(u8::from(command)).unwrap(), command);
        }
    }
}
