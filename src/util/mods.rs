/// Legacy mod bitflags that influence object defaults.
pub trait Mods: Copy {
    fn ez(self) -> bool;
    fn hr(self) -> bool;
    fn dt(self) -> bool;
    fn ht(self) -> bool;

    fn clock_rate(self) -> f64 {
        if self.dt() {
            1.5
        } else if self.ht() {
            0.75
        } else {
            1.0
        }
    }

    fn ar_multiplier(self) -> f32 {
        if self.hr() {
            1.4
        } else if self.ez() {
            0.5
        } else {
            1.0
        }
    }

    fn cs_multiplier(self) -> f32 {
        if self.hr() {
            1.3
        } else if self.ez() {
            0.5
        } else {
            1.0
        }
    }
}

macro_rules! impl_mods_fn {
    ( $fn_name:ident, $bits:expr ) => {
        fn $fn_name(self) -> bool {
            self & ($bits) != 0
        }
    };
}

impl Mods for u32 {
    impl_mods_fn!(ez, 1 << 1);
    impl_mods_fn!(hr, 1 << 4);
    impl_mods_fn!(dt, 1 << 6);
    impl_mods_fn!(ht, 1 << 8);
}
