#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use crate::shared::logger::init_logger;

    use anchor_lang::prelude::*;
    use forge::utils::Basket;
    use log::info;
    use shared::structs::BassetStatus;

    #[test]
    fn basket_snapshot() {
        init_logger();
        let mut basket = adjusting_basket_with_grace();
        basket.bassets[1].status = BassetStatus::Isolated;

        let data = basket.try_to_vec().unwrap();
        info!("Basket snapshot: {} bytes", data.len());

        // 4 bytes length prefix, then 16 + 16 + 1 + 1 per basset, then 16 of grace
        assert_eq!(data.len(), 4 + 3 * 34 + 16);

        let rehydrated = Basket::try_from_slice(&data).unwrap();
        assert_eq!(rehydrated, basket);
        assert!(rehydrated.validate().is_ok());
    }
}
