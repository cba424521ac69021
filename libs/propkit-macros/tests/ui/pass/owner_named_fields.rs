mod account {
    #[propkit::owner]
    #[derive(Debug, Default)]
    pub struct Account {
        #[property(get, set)]
        pub nickname: String,
        #[property(get)]
        pub balance: u64,
        #[property]
        pub pin: u16,
        pub region: String,
    }

    impl Account {
        pub fn deposit(&mut self, amount: u64) -> u64 {
            *self.balance.owner_value_mut(Self::OWNER_KEY) += amount;
            *self.balance
        }

        pub fn set_pin(&mut self, pin: u16) {
            self.pin.owner_assign(Self::OWNER_KEY, pin);
        }

        pub fn check_pin(&self, pin: u16) -> bool {
            *self.pin.owner_value(Self::OWNER_KEY) == pin
        }
    }
}

fn main() {
    let mut account = account::Account::default();
    account.nickname.assign("savings".to_owned());
    account.region = "eu".to_owned();
    account.set_pin(1234);

    assert_eq!(account.deposit(50), 50);
    assert_eq!(*account.balance, 50);
    assert_eq!(account.nickname.as_str(), "savings");
    assert!(account.check_pin(1234));
    assert!(format!("{account:?}").contains("pin: <private>"));
}
