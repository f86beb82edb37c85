//! Command sets (namespaces for opcodes)

label_table! {
    pub enum SetType: "command set" {
        General = 0 => "GENERAL",
        Special = 1 => "SPECIAL",
        Camera = 2 => "CAMERA",
        FlightController = 3 => "FLIGHT_CONTROLLER",
        Gimbal = 4 => "GIMBAL",
        CenterBoard = 5 => "CENTER_BOARD",
        Radio = 6 => "RADIO",
        Wifi = 7 => "WIFI",
        Dm368 = 8 => "DM368",
        HdMap = 9 => "HD_MAP",
        VpsAvoid = 10 => "VPS_AVOID",
        Sim = 11 => "SIM",
        Order = 12 => "ORDER",
        Battery = 13 => "BATTERY",
        DataRecorder = 14 => "DATA_RECORDER",
        Rtk = 15 => "RTK",
        Autotest = 16 => "AUTOTEST",
        Adsb = 17 => "ADSB",
        Unknown18 = 18 => "UNKNOWN_18",
        Unknown19 = 19 => "UNKNOWN_19",
        Unknown20 = 20 => "UNKNOWN_20",
        Unknown21 = 21 => "UNKNOWN_21",
        Unknown22 = 22 => "UNKNOWN_22",
        Unknown23 = 23 => "UNKNOWN_23",
        Unknown24 = 24 => "UNKNOWN_24",
        Unknown25 = 25 => "UNKNOWN_25",
        Unknown26 = 26 => "UNKNOWN_26",
        Unknown27 = 27 => "UNKNOWN_27",
        Unknown28 = 28 => "UNKNOWN_28",
        Unknown29 = 29 => "UNKNOWN_29",
        Unknown30 = 30 => "UNKNOWN_30",
        Unknown31 = 31 => "UNKNOWN_31",
    }
}
