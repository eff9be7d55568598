pub trait Zero {
    const ZERO: Self;
}

pub trait One {
    const ONE: Self;
}

macro_rules! impl_zero_one {
    ($($type: ty),+ $(,)?) => {
        $(
            impl Zero for $type {
                const ZERO: Self = 0;
            }

            impl One for $type {
                const ONE: Self = 1;
            }
        )+
    };
}

impl_zero_one!(i64, i128);
