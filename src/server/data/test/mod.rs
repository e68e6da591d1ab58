mod hotel;
