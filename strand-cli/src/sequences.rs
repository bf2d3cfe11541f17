use ibig::IBig;
use strand::{Pair, Stream};

pub(crate) fn naturals(from: i64) -> Stream<IBig> {
    Stream::starting_at_big(IBig::from(from))
}

pub(crate) fn fibonacci() -> Stream<IBig> {
    Stream::repeat(Pair::new(IBig::from(1u8), IBig::from(1u8)), |pair| {
        Pair::new(pair.second().clone(), pair.first() + pair.second())
    })
    .map(|pair| pair.first().clone())
}

pub(crate) fn factorial() -> Stream<IBig> {
    Stream::repeat(Pair::new(IBig::from(1u8), 1u32), |pair| {
        let position = pair.second() + 1;
        Pair::new(pair.first() * IBig::from(position), position)
    })
    .map(|pair| pair.first().clone())
}

pub(crate) fn primes() -> Stream<i64> {
    Stream::starting_at(2).filter(|n| {
        Stream::starting_at(2)
            .take_while(|divisor| divisor * divisor <= *n)
            .iter()
            .all(|divisor| n % divisor != 0)
    })
}
