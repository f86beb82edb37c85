//! Opcodes of the special command set

label_table! {
    /// Opcodes valid when the command set is `SPECIAL`
    pub enum SpecialCommand: "special command" {
        SdkControlNavModeToggle = 0x00 => "SDK_CONTROL_NAV_MODE_TOGGLE",
        SpecialAppControlOld = 0x01 => "SPECIAL_APP_CONTROL_OLD",
        SpecialRemoteControlOld = 0x02 => "SPECIAL_REMOTE_CONTROL_OLD",
        SpecialAppControl = 0x03 => "SPECIAL_APP_CONTROL",
        SpecialRemoteControl = 0x04 => "SPECIAL_REMOTE_CONTROL",
        SdkControlModeToggle = 0x05 => "SDK_CONTROL_MODE_TOGGLE",
        SdkControlCameraShot = 0x20 => "SDK_CONTROL_CAMERA_SHOT",
        SdkControlCameraStartVideo = 0x21 => "SDK_CONTROL_CAMERA_START_VIDEO",
        SdkControlCameraStopVideo = 0x22 => "SDK_CONTROL_CAMERA_STOP_VIDEO",
        SdkControlGimbalSpeed = 0x2A => "SDK_CONTROL_GIMBAL_SPEED",
        SdkControlGimbalAngle = 0x2B => "SDK_CONTROL_GIMBAL_ANGLE",
        UavLoopback = 0xFF => "UAV_LOOPBACK",
    }
}
