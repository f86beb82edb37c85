//! Device types carried in the low 5 bits of an address byte

label_table! {
    /// Addressable device kinds
    pub enum DeviceType: "device type" {
        Any = 0 => "ANY",
        Camera = 1 => "CAMERA",
        MobileApp = 2 => "MOBILE_APP",
        FlightController = 3 => "FLIGHT_CONTROLLER",
        Gimbal = 4 => "GIMBAL",
        MainBoard = 5 => "MAIN_BOARD",
        RemoteRadio = 6 => "REMOTE_RADIO",
        WifiSky = 7 => "WIFI_SKY",
        /// Air-side video encoder
        LbDm3xxSky = 8 => "LB_DM3XX_SKY",
        LbMcuSky = 9 => "LB_MCU_SKY",
        Pc = 10 => "PC",
        Battery = 11 => "BATTERY",
        Esc = 12 => "ESC",
        Dm368Ground = 13 => "DM368_GROUND",
        OfdmGround = 14 => "OFDM_GROUND",
        Lb68013Sky = 15 => "LB_68013_SKY",
        Ser68013Ground = 16 => "SER_68013_GROUND",
        Mvo = 17 => "MVO",
        Svo = 18 => "SVO",
        LbFpgaSky = 19 => "LB_FPGA_SKY",
        FpgaGround = 20 => "FPGA_GROUND",
        FpgaSimulation = 21 => "FPGA_SIMULATION",
        BaseStation = 22 => "BASE_STATION",
        Xu = 23 => "XU",
        RemoteBattery = 24 => "REMOTE_BATTERY",
        Imu = 25 => "IMU",
        Gps = 26 => "GPS",
        WifiGround = 27 => "WIFI_GROUND",
        SigCvt = 28 => "SIG_CVT",
        Pmu = 29 => "PMU",
        Unknown30 = 30 => "UNKNOWN_30",
        Wm330OrWm220 = 31 => "WM330_OR_WM220",
    }
}
